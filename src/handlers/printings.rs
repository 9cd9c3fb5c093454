use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;
use validator::Validate;

use super::common::{self, AppJson};
use crate::db::DbPool;
use crate::entities::printing;
use crate::entities::work_order::NextStage;
use crate::errors::ServiceError;

const MODEL: &str = "Printing";

#[derive(Debug, Deserialize, Validate)]
pub struct PrintingPayload {
    pub work_order_id: i32,
    pub machine_id: i32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub observations: String,
    pub next: NextStage,
}

async fn create_printing(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<PrintingPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = printing::ActiveModel {
        work_order_id: Set(payload.work_order_id),
        machine_id: Set(payload.machine_id),
        is_new: Set(payload.is_new),
        observations: Set(payload.observations),
        next: Set(payload.next),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_printing(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let printing = printing::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    Ok(common::fetched(printing))
}

async fn list_printings(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let printings = printing::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(printings))
}

async fn update_printing(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<PrintingPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = printing::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let row = printing::ActiveModel {
        id: Set(old.id),
        work_order_id: Set(payload.work_order_id),
        machine_id: Set(payload.machine_id),
        is_new: Set(payload.is_new),
        observations: Set(payload.observations),
        next: Set(payload.next),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_printing(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = printing::Entity::delete_by_id(id)
        .exec(db.as_ref())
        .await
        .map_err(|err| common::protect_delete(err.into(), MODEL))?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound(MODEL.to_string()));
    }
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_printings).post(create_printing))
        .route(
            "/:id",
            get(get_printing)
                .put(update_printing)
                .delete(delete_printing),
        )
}
