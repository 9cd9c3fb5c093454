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
use crate::services::po_details::{self as service, PoDetailPayload};

const MODEL: &str = "PODetail";

async fn create_po_detail(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<PoDetailPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    // No validation here: the service checks the parent order first, and
    // that error must win over field validation.
    let created = service::create_po_detail(db.as_ref(), payload).await?;
    Ok(common::created(MODEL, created))
}

async fn get_po_detail(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let detail = service::get_po_detail(db.as_ref(), id).await?;
    Ok(common::fetched(detail))
}

async fn list_po_details(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = service::list_po_details(db.as_ref()).await?;
    Ok(common::fetched(details))
}

async fn update_po_detail(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<PoDetailPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let updated = service::update_po_detail(db.as_ref(), id, payload).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_po_detail(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    service::delete_po_detail(db.as_ref(), id)
        .await
        .map_err(|err| common::protect_delete(err, MODEL))?;
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_po_details).post(create_po_detail))
        .route(
            "/:id",
            get(get_po_detail)
                .put(update_po_detail)
                .delete(delete_po_detail),
        )
}
