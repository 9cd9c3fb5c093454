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
use crate::services::work_orders::{self as service, WorkOrderPayload};

const MODEL: &str = "WorkOrder";

async fn create_work_order(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<WorkOrderPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let created = service::create_work_order(db.as_ref(), payload).await?;
    Ok(common::created(MODEL, created))
}

async fn get_work_order(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let work_order = service::get_work_order(db.as_ref(), id).await?;
    Ok(common::fetched(work_order))
}

async fn list_work_orders(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let work_orders = service::list_work_orders(db.as_ref()).await?;
    Ok(common::fetched(work_orders))
}

async fn update_work_order(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<WorkOrderPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let updated = service::update_work_order(db.as_ref(), id, payload).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_work_order(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    service::delete_work_order(db.as_ref(), id)
        .await
        .map_err(|err| common::protect_delete(err, MODEL))?;
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_work_orders).post(create_work_order))
        .route(
            "/:id",
            get(get_work_order)
                .put(update_work_order)
                .delete(delete_work_order),
        )
}
