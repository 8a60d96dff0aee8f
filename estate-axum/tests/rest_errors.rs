use axum::body::Body;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::{HeaderValue, Request};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use estate_axum::rest::{map_json_rejection, map_path_rejection};
use estate_axum::{axum, Confirmation, Created, EstateAxumError, Listing};
use estate_core::errors::EstateError;
use estate_core::EstateConfig;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn create(body: Result<Json<Value>, JsonRejection>) -> Result<Created<Value>, EstateAxumError> {
    let Json(body) = body.map_err(map_json_rejection)?;
    if body.get("name").is_none() {
        return Err(EstateError::bad_request("Validation failed: Name is required").into());
    }
    Ok(Created(body))
}

async fn find(Path(kind): Path<String>) -> Listing<Value> {
    match kind.as_str() {
        "some" => vec![json!({"id": 1})].into(),
        _ => Vec::new().into(),
    }
}

async fn get_one(id: Result<Path<i64>, PathRejection>) -> Result<Json<Value>, EstateAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    Err(EstateError::not_found(format!("Property not found with ID: {id}")).into())
}

async fn boom() -> Result<Json<Value>, EstateAxumError> {
    Err(anyhow::anyhow!("boom").into())
}

async fn remove(Path(id): Path<i64>) -> Confirmation {
    Confirmation(format!("Property with ID: {id} was successfully deleted."))
}

fn app() -> Router {
    let router = Router::new()
        .route("/items", post(create))
        .route("/lists/{kind}", get(find))
        .route("/items/{id}", get(get_one).delete(remove))
        .route("/boom", delete(boom));

    axum(EstateConfig::new())
        .use_router("/api", router)
        .with_request_tracing()
        .router
}

async fn json_body(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn malformed_json_returns_bad_request_payload() {
    let res = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/items")
                .header("content-type", "application/json")
                .body(Body::from("{\"name\":\"x\""))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 400);
    assert!(res.headers().get("x-request-id").is_some());
    let body = json_body(res).await;
    assert_eq!(body["status"], 400);
    assert!(body["message"].as_str().unwrap().starts_with("Validation failed: "));
    assert!(body["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn request_id_is_preserved_when_provided() {
    let provided = HeaderValue::from_static("req-test-123");
    let res = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/items")
                .header("content-type", "application/json")
                .header("x-request-id", provided.clone())
                .body(Body::from("{\"name\":\"ok\"}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 201);
    assert_eq!(res.headers().get("x-request-id").unwrap(), &provided);
}

#[tokio::test]
async fn typed_errors_keep_their_status() {
    let res = app()
        .oneshot(Request::builder().uri("/api/items/41").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 404);
    let body = json_body(res).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Property not found with ID: 41");
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let res = app()
        .oneshot(Request::builder().uri("/api/items/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 400);
    let body = json_body(res).await;
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn untyped_errors_map_to_internal_error() {
    let res = app()
        .oneshot(Request::builder().method("DELETE").uri("/api/boom").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 500);
    let body = json_body(res).await;
    assert_eq!(body["status"], 500);
    assert_eq!(body["message"], "Internal Server Error: boom");
}

#[tokio::test]
async fn empty_listing_is_no_content() {
    let res = app()
        .oneshot(Request::builder().uri("/api/lists/none").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 204);
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let res = app()
        .oneshot(Request::builder().uri("/api/lists/some").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(json_body(res).await, json!([{"id": 1}]));
}

#[tokio::test]
async fn confirmation_uses_status_payload() {
    let res = app()
        .oneshot(Request::builder().method("DELETE").uri("/api/items/3").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 200);
    let body = json_body(res).await;
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "Property with ID: 3 was successfully deleted.");
}
