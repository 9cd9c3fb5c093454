use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};

use super::common::{self, AppJson};
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::services::touches::{self as service, TouchPayload};

const MODEL: &str = "Touch";

async fn create_touch(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<TouchPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let created = service::create_touch(db.as_ref(), payload).await?;
    Ok(common::created(MODEL, created))
}

async fn get_touch(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let touch = service::get_touch(db.as_ref(), id).await?;
    Ok(common::fetched(touch))
}

async fn list_touches(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let touches = service::list_touches(db.as_ref()).await?;
    Ok(common::fetched(touches))
}

async fn update_touch(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<TouchPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let updated = service::update_touch(db.as_ref(), id, payload).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_touch(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    service::delete_touch(db.as_ref(), id).await?;
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_touches).post(create_touch))
        .route(
            "/:id",
            get(get_touch).put(update_touch).delete(delete_touch),
        )
}
