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
use crate::entities::machine::{self, MachineArea};
use crate::errors::ServiceError;

const MODEL: &str = "Machine";

#[derive(Debug, Deserialize, Validate)]
pub struct MachinePayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub area: MachineArea,
    #[serde(default = "common::default_true")]
    pub is_active: bool,
}

async fn create_machine(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<MachinePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = machine::ActiveModel {
        name: Set(payload.name),
        area: Set(payload.area),
        is_active: Set(payload.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_machine(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let machine = machine::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    Ok(common::fetched(machine))
}

async fn list_machines(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let machines = machine::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(machines))
}

async fn update_machine(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<MachinePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = machine::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let row = machine::ActiveModel {
        id: Set(old.id),
        name: Set(payload.name),
        area: Set(payload.area),
        is_active: Set(payload.is_active),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_machine(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = machine::Entity::delete_by_id(id)
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
        .route("/", get(list_machines).post(create_machine))
        .route(
            "/:id",
            get(get_machine).put(update_machine).delete(delete_machine),
        )
}
