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
use crate::entities::extrusion::{self, RollType};
use crate::entities::work_order::NextStage;
use crate::errors::ServiceError;

const MODEL: &str = "Extrusion";

#[derive(Debug, Deserialize, Validate)]
pub struct ExtrusionPayload {
    pub work_order_id: i32,
    pub machine_id: i32,
    pub roll_type: RollType,
    #[validate(range(min = 0))]
    pub rolls_quantity: i32,
    pub caliber: Decimal,
    #[serde(default)]
    pub observations: String,
    pub next: NextStage,
}

async fn create_extrusion(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<ExtrusionPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = extrusion::ActiveModel {
        work_order_id: Set(payload.work_order_id),
        machine_id: Set(payload.machine_id),
        roll_type: Set(payload.roll_type),
        rolls_quantity: Set(payload.rolls_quantity),
        caliber: Set(payload.caliber),
        observations: Set(payload.observations),
        next: Set(payload.next),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_extrusion(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let extrusion = extrusion::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    Ok(common::fetched(extrusion))
}

async fn list_extrusions(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let extrusions = extrusion::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(extrusions))
}

async fn update_extrusion(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<ExtrusionPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = extrusion::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let row = extrusion::ActiveModel {
        id: Set(old.id),
        work_order_id: Set(payload.work_order_id),
        machine_id: Set(payload.machine_id),
        roll_type: Set(payload.roll_type),
        rolls_quantity: Set(payload.rolls_quantity),
        caliber: Set(payload.caliber),
        observations: Set(payload.observations),
        next: Set(payload.next),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_extrusion(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = extrusion::Entity::delete_by_id(id)
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
        .route("/", get(list_extrusions).post(create_extrusion))
        .route(
            "/:id",
            get(get_extrusion)
                .put(update_extrusion)
                .delete(delete_extrusion),
        )
}
