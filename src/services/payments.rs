use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::payment::{self, PaymentMethod};
use crate::entities::po_change_log::AuditedModel;
use crate::entities::purchase_order;
use crate::errors::ServiceError;
use crate::services::{audit, is_unique_violation};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentPayload {
    pub purchase_order_id: i32,
    pub payment_method: PaymentMethod,
    #[validate(range(min = 0))]
    pub payment_term: Option<i32>,
    pub advance: Option<Decimal>,
}

#[instrument(skip(db, payload))]
pub async fn create_payment(
    db: &DbPool,
    payload: PaymentPayload,
) -> Result<payment::Model, ServiceError> {
    let order = purchase_order::Entity::find_by_id(payload.purchase_order_id)
        .one(db)
        .await?;
    if order.is_none() {
        return Err(ServiceError::PreconditionFailed(
            "Purchase Order does not exist.".to_string(),
        ));
    }

    let now = Utc::now();
    let row = payment::ActiveModel {
        purchase_order_id: Set(payload.purchase_order_id),
        payment_method: Set(payload.payment_method),
        payment_term: Set(payload.payment_term),
        advance: Set(payload.advance),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    row.insert(db).await.map_err(|err| {
        if is_unique_violation(&err) {
            ServiceError::Conflict(
                "A payment already exists for this purchase order.".to_string(),
            )
        } else {
            err.into()
        }
    })
}

/// Updates a payment, logging one change row per edited field in the same
/// transaction.
#[instrument(skip(db, payload))]
pub async fn update_payment(
    db: &DbPool,
    id: i32,
    payload: PaymentPayload,
) -> Result<payment::Model, ServiceError> {
    let txn = db.begin().await?;

    let old = payment::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Payment".to_string()))?;

    let new_state = payment::Model {
        id: old.id,
        purchase_order_id: old.purchase_order_id,
        payment_method: payload.payment_method,
        payment_term: payload.payment_term,
        advance: payload.advance,
        created_at: old.created_at,
        updated_at: Utc::now(),
    };

    let changes = audit::diff_payment(&old, &new_state);
    audit::record_changes(&txn, AuditedModel::Payment, old.id, changes).await?;

    let updated = payment::ActiveModel {
        id: Set(new_state.id),
        purchase_order_id: Set(new_state.purchase_order_id),
        payment_method: Set(new_state.payment_method),
        payment_term: Set(new_state.payment_term),
        advance: Set(new_state.advance),
        created_at: Set(new_state.created_at),
        updated_at: Set(new_state.updated_at),
    }
    .update(&txn)
    .await?;

    txn.commit().await?;
    Ok(updated)
}

#[instrument(skip(db))]
pub async fn get_payment(db: &DbPool, id: i32) -> Result<payment::Model, ServiceError> {
    payment::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Payment".to_string()))
}

#[instrument(skip(db))]
pub async fn list_payments(db: &DbPool) -> Result<Vec<payment::Model>, ServiceError> {
    Ok(payment::Entity::find().all(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_payment(db: &DbPool, id: i32) -> Result<(), ServiceError> {
    let result = payment::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound("Payment".to_string()));
    }
    Ok(())
}
