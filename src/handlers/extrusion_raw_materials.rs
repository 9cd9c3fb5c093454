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
use crate::entities::extrusion_raw_material;
use crate::errors::ServiceError;

const MODEL: &str = "ExtrusionRawMaterial";

#[derive(Debug, Deserialize, Validate)]
pub struct ExtrusionRawMaterialPayload {
    pub extrusion_id: i32,
    pub raw_material_id: i32,
    pub quantity: Decimal,
}

async fn create_entry(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<ExtrusionRawMaterialPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = extrusion_raw_material::ActiveModel {
        extrusion_id: Set(payload.extrusion_id),
        raw_material_id: Set(payload.raw_material_id),
        quantity: Set(payload.quantity),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_entry(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let entry = extrusion_raw_material::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(common::display_name(MODEL)))?;
    Ok(common::fetched(entry))
}

async fn list_entries(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let entries = extrusion_raw_material::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(entries))
}

async fn update_entry(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<ExtrusionRawMaterialPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = extrusion_raw_material::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(common::display_name(MODEL)))?;
    let row = extrusion_raw_material::ActiveModel {
        id: Set(old.id),
        extrusion_id: Set(payload.extrusion_id),
        raw_material_id: Set(payload.raw_material_id),
        quantity: Set(payload.quantity),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_entry(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = extrusion_raw_material::Entity::delete_by_id(id)
        .exec(db.as_ref())
        .await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound(common::display_name(MODEL)));
    }
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route(
            "/:id",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
}
