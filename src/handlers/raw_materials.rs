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
use crate::entities::raw_material::{self, RawMaterialType};
use crate::errors::ServiceError;

const MODEL: &str = "RawMaterial";

#[derive(Debug, Deserialize, Validate)]
pub struct RawMaterialPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub quantity: Decimal,
    pub raw_material_type: RawMaterialType,
    #[serde(default = "common::default_true")]
    pub is_active: bool,
}

async fn create_raw_material(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<RawMaterialPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = raw_material::ActiveModel {
        name: Set(payload.name),
        quantity: Set(payload.quantity),
        raw_material_type: Set(payload.raw_material_type),
        is_active: Set(payload.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_raw_material(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let raw_material = raw_material::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(common::display_name(MODEL)))?;
    Ok(common::fetched(raw_material))
}

async fn list_raw_materials(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let raw_materials = raw_material::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(raw_materials))
}

async fn update_raw_material(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<RawMaterialPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = raw_material::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(common::display_name(MODEL)))?;
    let row = raw_material::ActiveModel {
        id: Set(old.id),
        name: Set(payload.name),
        quantity: Set(payload.quantity),
        raw_material_type: Set(payload.raw_material_type),
        is_active: Set(payload.is_active),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_raw_material(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = raw_material::Entity::delete_by_id(id)
        .exec(db.as_ref())
        .await
        .map_err(|err| common::protect_delete(err.into(), MODEL))?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound(common::display_name(MODEL)));
    }
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_raw_materials).post(create_raw_material))
        .route(
            "/:id",
            get(get_raw_material)
                .put(update_raw_material)
                .delete(delete_raw_material),
        )
}
