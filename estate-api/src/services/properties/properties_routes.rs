use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use estate_axum::rest::{map_json_rejection, map_path_rejection};
use estate_axum::{Confirmation, Created, EstateAxumError, Listing};
use estate_schema_validator::validate;
use serde_json::Value;

use super::properties_schema::{CreateProperty, PatchProperty};
use super::properties_service::PropertiesService;
use super::properties_shared::Property;

type Svc = State<Arc<PropertiesService>>;

pub fn router(service: Arc<PropertiesService>) -> Router<()> {
    Router::new()
        .route("/", get(find).post(create))
        .route("/available", get(find_available))
        .route("/{id}", get(get_one).put(patch).delete(remove))
        .with_state(service)
}

async fn create(
    State(svc): Svc,
    data: Result<Json<Value>, JsonRejection>,
) -> Result<Created<Property>, EstateAxumError> {
    let Json(data) = data.map_err(map_json_rejection)?;
    let payload = validate::<CreateProperty>(&data)?;
    Ok(Created(svc.create(payload).await?))
}

async fn find(State(svc): Svc) -> Result<Listing<Property>, EstateAxumError> {
    Ok(svc.find().await?.into())
}

async fn find_available(State(svc): Svc) -> Result<Listing<Property>, EstateAxumError> {
    Ok(svc.find_available().await?.into())
}

async fn get_one(
    State(svc): Svc,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Property>, EstateAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    Ok(Json(svc.get(id).await?))
}

async fn patch(
    State(svc): Svc,
    id: Result<Path<i64>, PathRejection>,
    data: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Property>, EstateAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    let Json(data) = data.map_err(map_json_rejection)?;
    let payload = validate::<PatchProperty>(&data)?;
    Ok(Json(svc.patch(id, payload).await?))
}

async fn remove(
    State(svc): Svc,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Confirmation, EstateAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    Ok(Confirmation(svc.remove(id).await?))
}
