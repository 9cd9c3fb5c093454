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
use crate::entities::supplier;
use crate::errors::ServiceError;

const MODEL: &str = "Supplier";

#[derive(Debug, Deserialize, Validate)]
pub struct SupplierPayload {
    #[validate(length(min = 1, max = 150))]
    pub company_name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub contact: Option<String>,
    #[serde(default = "common::default_true")]
    pub is_active: bool,
}

async fn create_supplier(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<SupplierPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = supplier::ActiveModel {
        company_name: Set(payload.company_name),
        email: Set(payload.email),
        phone_number: Set(payload.phone_number),
        contact: Set(payload.contact),
        is_active: Set(payload.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_supplier(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let supplier = supplier::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    Ok(common::fetched(supplier))
}

async fn list_suppliers(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let suppliers = supplier::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(suppliers))
}

async fn update_supplier(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<SupplierPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = supplier::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let row = supplier::ActiveModel {
        id: Set(old.id),
        company_name: Set(payload.company_name),
        email: Set(payload.email),
        phone_number: Set(payload.phone_number),
        contact: Set(payload.contact),
        is_active: Set(payload.is_active),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_supplier(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = supplier::Entity::delete_by_id(id)
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
        .route("/", get(list_suppliers).post(create_supplier))
        .route(
            "/:id",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}
