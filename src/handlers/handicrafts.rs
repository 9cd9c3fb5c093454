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
use crate::entities::handicraft;
use crate::entities::work_order::NextStage;
use crate::errors::ServiceError;

const MODEL: &str = "Handicraft";

#[derive(Debug, Deserialize, Validate)]
pub struct HandicraftPayload {
    pub work_order_id: i32,
    pub machine_id: i32,
    #[serde(default)]
    pub observations: String,
    pub next: NextStage,
}

async fn create_handicraft(
    State(db): State<Arc<DbPool>>,
    AppJson(payload): AppJson<HandicraftPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "create", MODEL)?;
    let now = Utc::now();
    let row = handicraft::ActiveModel {
        work_order_id: Set(payload.work_order_id),
        machine_id: Set(payload.machine_id),
        observations: Set(payload.observations),
        next: Set(payload.next),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = row.insert(db.as_ref()).await?;
    Ok(common::created(MODEL, created))
}

async fn get_handicraft(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let handicraft = handicraft::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    Ok(common::fetched(handicraft))
}

async fn list_handicrafts(
    State(db): State<Arc<DbPool>>,
) -> Result<impl IntoResponse, ServiceError> {
    let handicrafts = handicraft::Entity::find().all(db.as_ref()).await?;
    Ok(common::fetched(handicrafts))
}

async fn update_handicraft(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<HandicraftPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    common::validate_payload(&payload, "update", MODEL)?;
    let old = handicraft::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or_else(|| ServiceError::NotFound(MODEL.to_string()))?;
    let row = handicraft::ActiveModel {
        id: Set(old.id),
        work_order_id: Set(payload.work_order_id),
        machine_id: Set(payload.machine_id),
        observations: Set(payload.observations),
        next: Set(payload.next),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(db.as_ref()).await?;
    Ok(common::updated(MODEL, updated))
}

async fn delete_handicraft(
    State(db): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = handicraft::Entity::delete_by_id(id)
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
        .route("/", get(list_handicrafts).post(create_handicraft))
        .route(
            "/:id",
            get(get_handicraft)
                .put(update_handicraft)
                .delete(delete_handicraft),
        )
}
