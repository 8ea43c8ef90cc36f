//! Banners, coupons, offers and membership tiers.

use backoffice_core::RecordId;
use backoffice_core::models::{Banner, Coupon, MembershipTier, Offer};

use super::{BANNERS, COUPONS, MEMBERSHIP_TIERS, OFFERS};
use crate::{ApiClient, ApiResult};

pub async fn list_banners(client: &ApiClient) -> ApiResult<Vec<Banner>> {
    client.list(&BANNERS).await
}

pub async fn create_banner(client: &ApiClient, banner: &Banner) -> ApiResult<Banner> {
    client.create(&BANNERS, banner).await
}

pub async fn update_banner(client: &ApiClient, banner: &Banner) -> ApiResult<Banner> {
    client.update(&BANNERS, &banner.id, banner).await
}

pub async fn delete_banner(client: &ApiClient, id: &RecordId) -> ApiResult<()> {
    client.remove(&BANNERS, id).await
}

pub async fn list_coupons(client: &ApiClient) -> ApiResult<Vec<Coupon>> {
    client.list(&COUPONS).await
}

pub async fn create_coupon(client: &ApiClient, coupon: &Coupon) -> ApiResult<Coupon> {
    client.create(&COUPONS, coupon).await
}

pub async fn update_coupon(client: &ApiClient, coupon: &Coupon) -> ApiResult<Coupon> {
    client.update(&COUPONS, &coupon.id, coupon).await
}

pub async fn delete_coupon(client: &ApiClient, id: &RecordId) -> ApiResult<()> {
    client.remove(&COUPONS, id).await
}

pub async fn list_offers(client: &ApiClient) -> ApiResult<Vec<Offer>> {
    client.list(&OFFERS).await
}

pub async fn create_offer(client: &ApiClient, offer: &Offer) -> ApiResult<Offer> {
    client.create(&OFFERS, offer).await
}

pub async fn update_offer(client: &ApiClient, offer: &Offer) -> ApiResult<Offer> {
    client.update(&OFFERS, &offer.id, offer).await
}

pub async fn delete_offer(client: &ApiClient, id: &RecordId) -> ApiResult<()> {
    client.remove(&OFFERS, id).await
}

pub async fn list_membership_tiers(client: &ApiClient) -> ApiResult<Vec<MembershipTier>> {
    client.list(&MEMBERSHIP_TIERS).await
}

pub async fn create_membership_tier(
    client: &ApiClient,
    tier: &MembershipTier,
) -> ApiResult<MembershipTier> {
    client.create(&MEMBERSHIP_TIERS, tier).await
}

pub async fn update_membership_tier(
    client: &ApiClient,
    tier: &MembershipTier,
) -> ApiResult<MembershipTier> {
    client.update(&MEMBERSHIP_TIERS, &tier.id, tier).await
}

pub async fn delete_membership_tier(client: &ApiClient, id: &RecordId) -> ApiResult<()> {
    client.remove(&MEMBERSHIP_TIERS, id).await
}
