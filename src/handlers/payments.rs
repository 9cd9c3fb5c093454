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
use crate::services::payments::{self as service, PaymentPayload};

const MODEL: &str = "Payment";

async fn create_payment(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<PaymentPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let created = service::create_payment(db.as_ref(), payload).await?;
    Ok(common::created(MODEL, created))
}

async fn get_payment(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let payment = service::get_payment(db.as_ref(), id).await?;
    Ok(common::fetched(payment))
}

async fn list_payments(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let payments = service::list_payments(db.as_ref()).await?;
    Ok(common::fetched(payments))
}

async fn update_payment(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<PaymentPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let updated = service::update_payment(db.as_ref(), id, payload).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_payment(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    service::delete_payment(db.as_ref(), id).await?;
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_payments).post(create_payment))
        .route(
            "/:id",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
}
