use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, LoaderTrait, ModelTrait, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::{self, AppJson};
use crate::db::DbPool;
use crate::entities::{employee, position};
use crate::errors::ServiceError;

const MODEL: &str = "Position";

#[derive(Debug, Deserialize, Validate)]
pub struct PositionPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "common::default_true")]
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
struct PositionWithEmployees {
    #[serde(flatten)]
    position: position::Model,
    employees: Vec<employee::Model>,
}

async fn create_position(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<PositionPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = position::ActiveModel {
        name: Set(payload.name),
        description: Set(payload.description),
        is_active: Set(payload.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_position(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let position = position::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let employees = position
        .find_related(employee::Entity)
        .all(db.as_ref())
        .await?;
    Ok(common::fetched(PositionWithEmployees {
        position,
        employees,
    }))
}

async fn list_positions(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let positions = position::Entity::find().all(db.as_ref()).await?;
    let employees = positions.load_many(employee::Entity, db.as_ref()).await?;
    let data: Vec<_> = positions
        .into_iter()
        .zip(employees)
        .map(|(position, employees)| PositionWithEmployees {
            position,
            employees,
        })
        .collect();
    Ok(common::fetched(data))
}

async fn update_position(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<PositionPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = position::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let row = position::ActiveModel {
        id: Set(old.id),
        name: Set(payload.name),
        description: Set(payload.description),
        is_active: Set(payload.is_active),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_position(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = position::Entity::delete_by_id(id)
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
        .route("/", get(list_positions).post(create_position))
        .route(
            "/:id",
            get(get_position).put(update_position).delete(delete_position),
        )
}
