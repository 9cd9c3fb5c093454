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
use crate::entities::product_type;
use crate::errors::ServiceError;

const MODEL: &str = "ProductType";

#[derive(Debug, Deserialize, Validate)]
pub struct ProductTypePayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "common::default_true")]
    pub is_active: bool,
}

async fn create_product_type(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<ProductTypePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = product_type::ActiveModel {
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

async fn get_product_type(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let product_type = product_type::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(common::display_name(MODEL)))?;
    Ok(common::fetched(product_type))
}

async fn list_product_types(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let product_types = product_type::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(product_types))
}

async fn update_product_type(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<ProductTypePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = product_type::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(common::display_name(MODEL)))?;
    let row = product_type::ActiveModel {
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

async fn delete_product_type(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = product_type::Entity::delete_by_id(id)
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
        .route("/", get(list_product_types).post(create_product_type))
        .route(
            "/:id",
            get(get_product_type)
                .put(update_product_type)
                .delete(delete_product_type),
        )
}
