use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use serde_json::{Value, json};

use backoffice_client::endpoints::{auth, customers, orders, staff};
use backoffice_client::{ApiClient, ApiError};
use backoffice_core::RecordId;
use backoffice_core::models::{NewEmployee, OrderStatus};

const TOKEN: &str = "test-token";

struct MockBackend {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl MockBackend {
    async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, router()).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn envelope(payload: Value) -> Json<Value> {
    Json(json!({ "error": false, "status": 200, "message": "OK", "payload": payload }))
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": true, "status": 401, "message": "jwt missing" })),
    )
        .into_response()
}

fn router() -> Router {
    Router::new()
        .route(
            "/v1/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "secret-pass" {
                    envelope(json!({
                        "token": TOKEN,
                        "employee": {
                            "_id": "emp-1",
                            "name": "Asha",
                            "email": body["email"],
                            "kind": "admin"
                        }
                    }))
                    .into_response()
                } else {
                    Json(json!({
                        "error": true,
                        "status": 401,
                        "message": "invalid credentials",
                        "payload": null
                    }))
                    .into_response()
                }
            }),
        )
        .route(
            "/v1/employee/get-all-employees",
            get(|headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return unauthorized();
                }
                envelope(json!([
                    { "_id": "emp-1", "name": "Asha", "email": "asha@example.com" },
                    { "_id": "emp-2", "name": "Ravi", "email": "ravi@example.com", "isActive": false }
                ]))
                .into_response()
            }),
        )
        .route(
            "/v1/employee/delete-employee/:id",
            delete(|Path(id): Path<String>| async move {
                assert_eq!(id, "emp-2");
                Json(json!({ "error": false, "status": 200, "message": "deleted" }))
            }),
        )
        .route(
            "/v1/order/update-order-status/:id",
            patch(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                envelope(json!({
                    "_id": id,
                    "orderNumber": "ORD-1",
                    "customerId": "c-1",
                    "totalAmount": 12.5,
                    "status": body["status"]
                }))
            }),
        )
        .route(
            "/v1/customer/get-all-customers",
            get(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
        )
}

#[tokio::test]
async fn login_then_authorized_list() {
    let srv = MockBackend::spawn().await;
    let client = srv.client();

    let login = auth::login(
        &client,
        &auth::Credentials {
            email: "asha@example.com".to_string(),
            password: "secret-pass".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(login.token, TOKEN);
    assert_eq!(login.user.name, "Asha");

    let client = client.with_token(login.token);
    let employees = staff::list_employees(&client).await.unwrap();
    assert_eq!(employees.len(), 2);
    assert!(!employees[1].is_active);
}

#[tokio::test]
async fn missing_token_surfaces_parsed_error_body() {
    let srv = MockBackend::spawn().await;
    let err = staff::list_employees(&srv.client()).await.unwrap_err();

    assert!(err.is_unauthorized());
    match err {
        ApiError::Backend { message, body, .. } => {
            assert_eq!(message, "jwt missing");
            assert_eq!(body["error"], true);
        }
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_envelope_on_200_is_an_error() {
    let srv = MockBackend::spawn().await;
    let err = auth::login(
        &srv.client(),
        &auth::Credentials {
            email: "asha@example.com".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "backend error (401): invalid credentials");
}

#[tokio::test]
async fn unparseable_error_body_is_returned_raw() {
    let srv = MockBackend::spawn().await;
    let err = customers::list_customers(&srv.client()).await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 502);
            assert!(body.contains("upstream down"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_and_patch_wrappers() {
    let srv = MockBackend::spawn().await;
    let client = srv.client().with_token(TOKEN);

    staff::delete_employee(&client, &RecordId::new("emp-2").unwrap())
        .await
        .unwrap();

    let order = orders::update_order_status(
        &client,
        &RecordId::new("o-9").unwrap(),
        OrderStatus::OutForDelivery,
    )
    .await
    .unwrap();
    assert_eq!(order.id.as_str(), "o-9");
    assert_eq!(order.status, OrderStatus::OutForDelivery);
}

#[tokio::test]
async fn invalid_input_never_reaches_the_backend() {
    // Nothing listens on this client's base URL; a request would be a transport error.
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
    let err = staff::create_employee(
        &client,
        &NewEmployee {
            name: String::new(),
            email: "x@example.com".to_string(),
            password: "long-enough".to_string(),
            phone: None,
            role: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Invalid(_)));
}

#[tokio::test]
async fn transport_failure_is_reported_once() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{addr}"), Duration::from_secs(1)).unwrap();
    let err = orders::list_orders(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}
