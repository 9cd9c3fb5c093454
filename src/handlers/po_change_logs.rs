use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use validator::Validate;

use super::common::{self, AppJson};
use crate::db::DbPool;
use crate::entities::po_change_log::{self, AuditedModel};
use crate::errors::ServiceError;

const MODEL: &str = "POChangeLog";

/// Rows are normally appended by the audited updates themselves; the
/// write surface exists for parity with the other resources.
#[derive(Debug, Deserialize, Validate)]
pub struct PoChangeLogPayload {
    pub model_name: AuditedModel,
    pub record_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChangeLogFilter {
    model_name: Option<AuditedModel>,
    record_id: Option<i32>,
}

async fn create_change_log(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<PoChangeLogPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let row = po_change_log::ActiveModel {
        model_name: Set(payload.model_name),
        record_id: Set(payload.record_id),
        field_name: Set(payload.field_name),
        old_value: Set(payload.old_value),
        new_value: Set(payload.new_value),
        change_date: Set(Utc::now()),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_change_log(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let entry = po_change_log::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(common::display_name(MODEL)))?;
    Ok(common::fetched(entry))
}

async fn list_change_logs(
    State(db): State<Arc<DbPool>>,
    axum::extract::Query(filter): axum::extract::Query<ChangeLogFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let mut query = po_change_log::Entity::find();
    if let Some(model_name) = filter.model_name {
        query = query.filter(po_change_log::Column::ModelName.eq(model_name));
    }
    if let Some(record_id) = filter.record_id {
        query = query.filter(po_change_log::Column::RecordId.eq(record_id));
    }
    let entries = query
        .order_by_desc(po_change_log::Column::ChangeDate)
        .all(db.as_ref())
        .await?;
    Ok(common::fetched(entries))
}

async fn update_change_log(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<PoChangeLogPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = po_change_log::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(common::display_name(MODEL)))?;
    let row = po_change_log::ActiveModel {
        id: Set(old.id),
        model_name: Set(payload.model_name),
        record_id: Set(payload.record_id),
        field_name: Set(payload.field_name),
        old_value: Set(payload.old_value),
        new_value: Set(payload.new_value),
        change_date: Set(old.change_date),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_change_log(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = po_change_log::Entity::delete_by_id(id)
        .exec(db.as_ref())
        .await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound(common::display_name(MODEL)));
    }
    Ok(common::deleted())
}

pub fn routes() -> Router<Arc<DbPool>> {
    Router::new()
        .route("/", get(list_change_logs).post(create_change_log))
        .route(
            "/:id",
            get(get_change_log)
                .put(update_change_log)
                .delete(delete_change_log),
        )
}
