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
use crate::services::purchase_orders::{self as service, PurchaseOrderPayload};

const MODEL: &str = "PurchaseOrder";

async fn create_purchase_order(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<PurchaseOrderPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let created = service::create_purchase_order(db.as_ref(), payload).await?;
    Ok(common::created(MODEL, created))
}

async fn get_purchase_order(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let order = service::get_purchase_order(db.as_ref(), id).await?;
    Ok(common::fetched(order))
}

async fn list_purchase_orders(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let orders = service::list_purchase_orders(db.as_ref()).await?;
    Ok(common::fetched(orders))
}

async fn update_purchase_order(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<PurchaseOrderPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let updated = service::update_purchase_order(db.as_ref(), id, payload).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_purchase_order(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    service::delete_purchase_order(db.as_ref(), id)
        .await
        .map_err(|err| common::protect_delete(err, MODEL))?;
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_purchase_orders).post(create_purchase_order))
        .route(
            "/:id",
            get(get_purchase_order)
                .put(update_purchase_order)
                .delete(delete_purchase_order),
        )
}
