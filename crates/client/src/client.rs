//! HTTP client for the backend API.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::envelope::decode_response;
use crate::ApiResult;

/// Fixed per-request timeout unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin client: base URL, optional bearer token, one attempt per call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace (or drop) the bearer token attached to later calls.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.is_empty());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%method, path, "api request");

        let mut req = self.request(method.clone(), path);
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::debug!(%method, path, error = %e, "api transport failure");
            e
        })?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        tracing::debug!(%method, path, status = status.as_u16(), "api response");
        decode_response(status, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised_and_token_optional() {
        let mut client = ApiClient::new("http://api.local/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://api.local");
        assert_eq!(client.token(), None);

        client.set_token(Some(String::new()));
        assert_eq!(client.token(), None);

        let client = client.with_token("abc");
        assert_eq!(client.token(), Some("abc"));
    }
}
