use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;
use validator::Validate;

use super::common::{self, AppJson};
use crate::db::DbPool;
use crate::entities::sealing;
use crate::entities::work_order::NextStage;
use crate::errors::ServiceError;

const MODEL: &str = "Sealing";

#[derive(Debug, Deserialize, Validate)]
pub struct SealingPayload {
    pub work_order_id: i32,
    pub machine_id: i32,
    pub caliber: Decimal,
    #[validate(range(min = 0))]
    pub hits: i32,
    #[validate(range(min = 0))]
    pub package_units: i32,
    #[validate(range(min = 0))]
    pub bundle_units: i32,
    #[serde(default)]
    pub observations: String,
    pub next: NextStage,
}

async fn create_sealing(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<SealingPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = sealing::ActiveModel {
        work_order_id: Set(payload.work_order_id),
        machine_id: Set(payload.machine_id),
        caliber: Set(payload.caliber),
        hits: Set(payload.hits),
        package_units: Set(payload.package_units),
        bundle_units: Set(payload.bundle_units),
        observations: Set(payload.observations),
        next: Set(payload.next),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_sealing(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let sealing = sealing::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    Ok(common::fetched(sealing))
}

async fn list_sealings(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let sealings = sealing::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(sealings))
}

async fn update_sealing(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<SealingPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = sealing::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let row = sealing::ActiveModel {
        id: Set(old.id),
        work_order_id: Set(payload.work_order_id),
        machine_id: Set(payload.machine_id),
        caliber: Set(payload.caliber),
        hits: Set(payload.hits),
        package_units: Set(payload.package_units),
        bundle_units: Set(payload.bundle_units),
        observations: Set(payload.observations),
        next: Set(payload.next),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_sealing(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = sealing::Entity::delete_by_id(id)
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
        .route("/", get(list_sealings).post(create_sealing))
        .route(
            "/:id",
            get(get_sealing).put(update_sealing).delete(delete_sealing),
        )
}
