use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use sea_orm::{LoaderTrait, ModelTrait};
use serde::Serialize;

use super::common::{self, AppJson};
use crate::db::DbPool;
use crate::entities::{po_detail, reference};
use crate::errors::ServiceError;
use crate::services::references::{self as service, ReferencePayload};

const MODEL: &str = "Reference";

#[derive(Debug, Serialize)]
struct ReferenceWithDetails {
    #[serde(flatten)]
    reference: reference::Model,
    order_details: Vec<po_detail::Model>,
}

async fn create_reference(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<ReferencePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let created = service::create_reference(db.as_ref(), payload).await?;
    Ok(common::created(MODEL, created))
}

async fn get_reference(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let reference = service::get_reference(db.as_ref(), id).await?;
    let order_details = reference
        .find_related(po_detail::Entity)
        .all(db.as_ref())
        .await?;
    Ok(common::fetched(ReferenceWithDetails {
        reference,
        order_details,
    }))
}

async fn list_references(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let references = service::list_references(db.as_ref()).await?;
    let details = references.load_many(po_detail::Entity, db.as_ref()).await?;
    let data: Vec<_> = references
        .into_iter()
        .zip(details)
        .map(|(reference, order_details)| ReferenceWithDetails {
            reference,
            order_details,
        })
        .collect();
    Ok(common::fetched(data))
}

async fn update_reference(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<ReferencePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let updated = service::update_reference(db.as_ref(), id, payload).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_reference(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    service::delete_reference(db.as_ref(), id)
        .await
        .map_err(|err| common::protect_delete(err, MODEL))?;
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_references).post(create_reference))
        .route(
            "/:id",
            get(get_reference)
                .put(update_reference)
                .delete(delete_reference),
        )
}
