use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, LoaderTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::machine::MachineArea;
use crate::entities::{touch, touch_detail};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TouchPayload {
    pub work_order_id: i32,
    #[serde(default = "default_area")]
    pub area: MachineArea,
    #[validate(range(min = 0))]
    pub theorical_quantity: i32,
}

fn default_area() -> MachineArea {
    MachineArea::None
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TouchDetailPayload {
    pub touch_id: i32,
    pub employee_id: i32,
    pub finished_weight: Decimal,
    pub finished_units: Option<i32>,
    pub waste_weight: Decimal,
}

/// Read shape for a touch: the totals plus the rows they were summed from.
#[derive(Debug, Serialize)]
pub struct TouchWithDetails {
    #[serde(flatten)]
    pub touch: touch::Model,
    pub details: Vec<touch_detail::Model>,
}

/// Re-sums the three totals over the touch's current child rows and
/// persists them. The caller's transaction must already contain the child
/// insert or delete this rollup reflects.
async fn refresh_totals<C: ConnectionTrait>(conn: &C, touch_id: i32) -> Result<(), ServiceError> {
    let details = touch_detail::Entity::find()
        .filter(touch_detail::Column::TouchId.eq(touch_id))
        .all(conn)
        .await?;

    let mut finished_weight = Decimal::ZERO;
    let mut finished_units = 0i32;
    let mut waste_weight = Decimal::ZERO;
    for row in &details {
        finished_weight += row.finished_weight;
        finished_units += row.finished_units.unwrap_or(0);
        waste_weight += row.waste_weight;
    }

    let row = touch::ActiveModel {
        id: Set(touch_id),
        total_finished_weight: Set(finished_weight),
        total_finished_units: Set(finished_units),
        total_waste_weight: Set(waste_weight),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };
    row.update(conn).await?;
    Ok(())
}

#[instrument(skip(db, payload))]
pub async fn create_touch(
    db: &DbPool,
    payload: TouchPayload,
) -> Result<touch::Model, ServiceError> {
    let now = Utc::now();
    let row = touch::ActiveModel {
        work_order_id: Set(payload.work_order_id),
        area: Set(payload.area),
        total_finished_weight: Set(Decimal::ZERO),
        total_finished_units: Set(0),
        total_waste_weight: Set(Decimal::ZERO),
        theorical_quantity: Set(payload.theorical_quantity),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

/// Totals are derived from the child rows and are not client-editable.
#[instrument(skip(db, payload))]
pub async fn update_touch(
    db: &DbPool,
    id: i32,
    payload: TouchPayload,
) -> Result<touch::Model, ServiceError> {
    let old = touch::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Touch".to_string()))?;

    let row = touch::ActiveModel {
        id: Set(old.id),
        work_order_id: Set(payload.work_order_id),
        area: Set(payload.area),
        theorical_quantity: Set(payload.theorical_quantity),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(row.update(db).await?)
}

#[instrument(skip(db))]
pub async fn get_touch(db: &DbPool, id: i32) -> Result<TouchWithDetails, ServiceError> {
    let touch = touch::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Touch".to_string()))?;
    let details = touch_detail::Entity::find()
        .filter(touch_detail::Column::TouchId.eq(touch.id))
        .all(db)
        .await?;
    Ok(TouchWithDetails { touch, details })
}

#[instrument(skip(db))]
pub async fn list_touches(db: &DbPool) -> Result<Vec<TouchWithDetails>, ServiceError> {
    let touches = touch::Entity::find().all(db).await?;
    let details = touches.load_many(touch_detail::Entity, db).await?;
    Ok(touches
        .into_iter()
        .zip(details)
        .map(|(touch, details)| TouchWithDetails { touch, details })
        .collect())
}

#[instrument(skip(db))]
pub async fn delete_touch(db: &DbPool, id: i32) -> Result<(), ServiceError> {
    let result = touch::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound("Touch".to_string()));
    }
    Ok(())
}

/// Inserts the child row and rolls the parent totals up in the same
/// transaction, so a reader never sees totals out of step with the rows.
#[instrument(skip(db, payload))]
pub async fn create_touch_detail(
    db: &DbPool,
    payload: TouchDetailPayload,
) -> Result<touch_detail::Model, ServiceError> {
    let txn = db.begin().await?;

    touch::Entity::find_by_id(payload.touch_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Touch".to_string()))?;

    let now = Utc::now();
    let row = touch_detail::ActiveModel {
        touch_id: Set(payload.touch_id),
        employee_id: Set(payload.employee_id),
        finished_weight: Set(payload.finished_weight),
        finished_units: Set(payload.finished_units),
        waste_weight: Set(payload.waste_weight),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let detail = row.insert(&txn).await?;

    refresh_totals(&txn, detail.touch_id).await?;
    txn.commit().await?;
    Ok(detail)
}

/// Edits to a child re-run the rollup as well, and a detail moved to
/// another touch refreshes both parents.
#[instrument(skip(db, payload))]
pub async fn update_touch_detail(
    db: &DbPool,
    id: i32,
    payload: TouchDetailPayload,
) -> Result<touch_detail::Model, ServiceError> {
    let txn = db.begin().await?;

    let old = touch_detail::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Touch Detail".to_string()))?;

    touch::Entity::find_by_id(payload.touch_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Touch".to_string()))?;

    let row = touch_detail::ActiveModel {
        id: Set(old.id),
        touch_id: Set(payload.touch_id),
        employee_id: Set(payload.employee_id),
        finished_weight: Set(payload.finished_weight),
        finished_units: Set(payload.finished_units),
        waste_weight: Set(payload.waste_weight),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    let updated = row.update(&txn).await?;

    refresh_totals(&txn, updated.touch_id).await?;
    if old.touch_id != updated.touch_id {
        refresh_totals(&txn, old.touch_id).await?;
    }

    txn.commit().await?;
    Ok(updated)
}

/// Deleting the last child leaves the totals at zero, not at their old
/// values.
#[instrument(skip(db))]
pub async fn delete_touch_detail(db: &DbPool, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let detail = touch_detail::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Touch Detail".to_string()))?;
    let touch_id = detail.touch_id;

    touch_detail::Entity::delete_by_id(id).exec(&txn).await?;
    refresh_totals(&txn, touch_id).await?;

    txn.commit().await?;
    Ok(())
}

#[instrument(skip(db))]
pub async fn get_touch_detail(db: &DbPool, id: i32) -> Result<touch_detail::Model, ServiceError> {
    touch_detail::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Touch Detail".to_string()))
}

#[instrument(skip(db))]
pub async fn list_touch_details(db: &DbPool) -> Result<Vec<touch_detail::Model>, ServiceError> {
    Ok(touch_detail::Entity::find().all(db).await?)
}
