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
use crate::services::touches::{self as service, TouchDetailPayload};

const MODEL: &str = "TouchDetail";

async fn create_touch_detail(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<TouchDetailPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let created = service::create_touch_detail(db.as_ref(), payload).await?;
    Ok(common::created(MODEL, created))
}

async fn get_touch_detail(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let detail = service::get_touch_detail(db.as_ref(), id).await?;
    Ok(common::fetched(detail))
}

async fn list_touch_details(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = service::list_touch_details(db.as_ref()).await?;
    Ok(common::fetched(details))
}

async fn update_touch_detail(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<TouchDetailPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let updated = service::update_touch_detail(db.as_ref(), id, payload).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_touch_detail(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    service::delete_touch_detail(db.as_ref(), id)
        .await
        .map_err(|err| common::protect_delete(err, MODEL))?;
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_touch_details).post(create_touch_detail))
        .route(
            "/:id",
            get(get_touch_detail)
                .put(update_touch_detail)
                .delete(delete_touch_detail),
        )
}
