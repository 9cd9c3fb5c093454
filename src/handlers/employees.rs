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
use crate::entities::employee;
use crate::errors::ServiceError;

const MODEL: &str = "Employee";

#[derive(Debug, Deserialize, Validate)]
pub struct EmployeePayload {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 30))]
    pub phone_number: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub entity: String,
    pub position_id: i32,
    #[serde(default = "common::default_true")]
    pub is_active: bool,
}

async fn create_employee(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = employee::ActiveModel {
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        phone_number: Set(payload.phone_number),
        email: Set(payload.email),
        entity: Set(payload.entity),
        position_id: Set(payload.position_id),
        is_active: Set(payload.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_employee(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let employee = employee::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    Ok(common::fetched(employee))
}

async fn list_employees(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let employees = employee::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(employees))
}

async fn update_employee(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = employee::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let row = employee::ActiveModel {
        id: Set(old.id),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        phone_number: Set(payload.phone_number),
        email: Set(payload.email),
        entity: Set(payload.entity),
        position_id: Set(payload.position_id),
        is_active: Set(payload.is_active),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_employee(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = employee::Entity::delete_by_id(id)
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
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}
