use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use estate_axum::rest::{map_json_rejection, map_path_rejection};
use estate_axum::{Confirmation, Created, EstateAxumError, Listing};
use estate_schema_validator::validate;
use serde_json::Value;

use super::tenants_schema::{CreateTenant, PasswordUpdate, ProfileUpdate};
use super::tenants_service::TenantsService;
use super::tenants_shared::Tenant;

type Svc = State<Arc<TenantsService>>;

pub fn router(service: Arc<TenantsService>) -> Router<()> {
    Router::new()
        .route("/", get(find).post(create))
        .route("/{id}", get(get_one).delete(remove))
        .route("/{id}/edit-profile", put(edit_profile))
        .route("/{id}/update-password", put(update_password))
        .with_state(service)
}

async fn create(
    State(svc): Svc,
    data: Result<Json<Value>, JsonRejection>,
) -> Result<Created<Tenant>, EstateAxumError> {
    let Json(data) = data.map_err(map_json_rejection)?;
    let payload = validate::<CreateTenant>(&data)?;
    Ok(Created(svc.create(payload).await?))
}

async fn find(State(svc): Svc) -> Result<Listing<Tenant>, EstateAxumError> {
    Ok(svc.find().await?.into())
}

async fn get_one(
    State(svc): Svc,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Tenant>, EstateAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    Ok(Json(svc.get(id).await?))
}

async fn edit_profile(
    State(svc): Svc,
    id: Result<Path<i64>, PathRejection>,
    data: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Tenant>, EstateAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    let Json(data) = data.map_err(map_json_rejection)?;
    let payload = validate::<ProfileUpdate>(&data)?;
    Ok(Json(svc.update_profile(id, payload).await?))
}

async fn update_password(
    State(svc): Svc,
    id: Result<Path<i64>, PathRejection>,
    data: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Tenant>, EstateAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    let Json(data) = data.map_err(map_json_rejection)?;
    let payload = validate::<PasswordUpdate>(&data)?;
    Ok(Json(svc.update_password(id, payload).await?))
}

async fn remove(
    State(svc): Svc,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Confirmation, EstateAxumError> {
    let Path(id) = id.map_err(map_path_rejection)?;
    Ok(Confirmation(svc.remove(id).await?))
}
