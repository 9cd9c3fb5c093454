use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{
    ActiveModelTrait, EntityTrait, LoaderTrait, ModelTrait, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::po_change_log::AuditedModel;
use crate::entities::{payment, po_detail, purchase_order};
use crate::errors::ServiceError;
use crate::services::audit;

/// The applicable sales tax rate.
const IVA_RATE: Decimal = dec!(0.19);

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PurchaseOrderPayload {
    pub order_date: NaiveDate,
    pub customer_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub order_number: String,
    pub employee_id: i32,
    pub observations: Option<String>,
    pub subtotal: Decimal,
    #[serde(default = "default_has_iva")]
    pub has_iva: bool,
    pub delivery_date: NaiveDate,
    #[serde(default)]
    pub was_annulled: bool,
}

fn default_has_iva() -> bool {
    true
}

/// Read shape for a purchase order: the order embeds its details and
/// payment (fixed eager depth).
#[derive(Debug, Serialize)]
pub struct PurchaseOrderWithRelations {
    #[serde(flatten)]
    pub order: purchase_order::Model,
    pub details: Vec<po_detail::Model>,
    pub payment: Option<payment::Model>,
}

/// `iva = has_iva ? round(subtotal * 0.19, 2) : 0`, `total = subtotal + iva`.
///
/// Inputs are not validated; a negative subtotal flows straight through.
pub fn order_totals(subtotal: Decimal, has_iva: bool) -> (Decimal, Decimal) {
    let iva = if has_iva {
        (subtotal * IVA_RATE).round_dp(2)
    } else {
        Decimal::ZERO
    };
    (iva, subtotal + iva)
}

/// Pins the money fields to two decimal places. SQLite hands decimals back
/// without their column scale, so both the serialized order and the audit
/// snapshots would otherwise render "100" where "100.00" was stored.
pub(crate) fn with_money_scale(mut order: purchase_order::Model) -> purchase_order::Model {
    order.subtotal.rescale(2);
    if let Some(iva) = order.iva.as_mut() {
        iva.rescale(2);
    }
    if let Some(total) = order.total.as_mut() {
        total.rescale(2);
    }
    order
}

#[instrument(skip(db, payload))]
pub async fn create_purchase_order(
    db: &DbPool,
    payload: PurchaseOrderPayload,
) -> Result<purchase_order::Model, ServiceError> {
    let (iva, total) = order_totals(payload.subtotal, payload.has_iva);
    let now = Utc::now();
    let order = purchase_order::ActiveModel {
        order_date: Set(payload.order_date),
        customer_id: Set(payload.customer_id),
        order_number: Set(payload.order_number),
        employee_id: Set(payload.employee_id),
        observations: Set(payload.observations),
        subtotal: Set(payload.subtotal),
        has_iva: Set(payload.has_iva),
        iva: Set(Some(iva)),
        total: Set(Some(total)),
        delivery_date: Set(payload.delivery_date),
        was_annulled: Set(payload.was_annulled),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(with_money_scale(order.insert(db).await?))
}

/// Recomputes the derived totals, appends one change-log row per changed
/// field and persists the update, all in one transaction.
#[instrument(skip(db, payload))]
pub async fn update_purchase_order(
    db: &DbPool,
    id: i32,
    payload: PurchaseOrderPayload,
) -> Result<purchase_order::Model, ServiceError> {
    let txn = db.begin().await?;

    let old = purchase_order::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .map(with_money_scale)
        .ok_or_else(|| ServiceError::NotFound("Purchase Order".to_string()))?;

    let (iva, total) = order_totals(payload.subtotal, payload.has_iva);
    let new_state = with_money_scale(purchase_order::Model {
        id: old.id,
        order_date: payload.order_date,
        customer_id: payload.customer_id,
        order_number: payload.order_number,
        employee_id: payload.employee_id,
        observations: payload.observations,
        subtotal: payload.subtotal,
        has_iva: payload.has_iva,
        iva: Some(iva),
        total: Some(total),
        delivery_date: payload.delivery_date,
        was_annulled: payload.was_annulled,
        created_at: old.created_at,
        updated_at: Utc::now(),
    });

    let changes = audit::diff_purchase_order(&old, &new_state);
    audit::record_changes(&txn, AuditedModel::PurchaseOrder, old.id, changes).await?;

    let updated = purchase_order::ActiveModel {
        id: Set(new_state.id),
        order_date: Set(new_state.order_date),
        customer_id: Set(new_state.customer_id),
        order_number: Set(new_state.order_number.clone()),
        employee_id: Set(new_state.employee_id),
        observations: Set(new_state.observations.clone()),
        subtotal: Set(new_state.subtotal),
        has_iva: Set(new_state.has_iva),
        iva: Set(new_state.iva),
        total: Set(new_state.total),
        delivery_date: Set(new_state.delivery_date),
        was_annulled: Set(new_state.was_annulled),
        created_at: Set(new_state.created_at),
        updated_at: Set(new_state.updated_at),
    }
    .update(&txn)
    .await?;

    txn.commit().await?;
    Ok(with_money_scale(updated))
}

#[instrument(skip(db))]
pub async fn get_purchase_order(
    db: &DbPool,
    id: i32,
) -> Result<PurchaseOrderWithRelations, ServiceError> {
    let order = purchase_order::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(with_money_scale)
        .ok_or_else(|| ServiceError::NotFound("Purchase Order".to_string()))?;

    let details = order.find_related(po_detail::Entity).all(db).await?;
    let payment = order.find_related(payment::Entity).one(db).await?;
    Ok(PurchaseOrderWithRelations {
        order,
        details,
        payment,
    })
}

#[instrument(skip(db))]
pub async fn list_purchase_orders(
    db: &DbPool,
) -> Result<Vec<PurchaseOrderWithRelations>, ServiceError> {
    let orders = purchase_order::Entity::find().all(db).await?;
    let details = orders.load_many(po_detail::Entity, db).await?;
    let payments = orders.load_one(payment::Entity, db).await?;

    Ok(orders
        .into_iter()
        .zip(details)
        .zip(payments)
        .map(|((order, details), payment)| PurchaseOrderWithRelations {
            order: with_money_scale(order),
            details,
            payment,
        })
        .collect())
}

#[instrument(skip(db))]
pub async fn delete_purchase_order(db: &DbPool, id: i32) -> Result<(), ServiceError> {
    let result = purchase_order::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound("Purchase Order".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_with_iva() {
        let (iva, total) = order_totals(dec!(100.00), true);
        assert_eq!(iva, dec!(19.00));
        assert_eq!(total, dec!(119.00));
    }

    #[test]
    fn totals_without_iva() {
        let (iva, total) = order_totals(dec!(250.50), false);
        assert_eq!(iva, Decimal::ZERO);
        assert_eq!(total, dec!(250.50));
    }

    #[test]
    fn iva_is_rounded_to_cents() {
        // 33.33 * 0.19 = 6.3327
        let (iva, total) = order_totals(dec!(33.33), true);
        assert_eq!(iva, dec!(6.33));
        assert_eq!(total, dec!(39.66));
    }

    #[test]
    fn negative_subtotal_passes_through() {
        let (iva, total) = order_totals(dec!(-100.00), true);
        assert_eq!(iva, dec!(-19.00));
        assert_eq!(total, dec!(-119.00));
    }

    // SQLite returns decimals with their scale stripped; the rendered text
    // must still carry two places.
    #[test]
    fn money_fields_are_pinned_to_cents() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let order = with_money_scale(purchase_order::Model {
            id: 1,
            order_date: day,
            customer_id: 7,
            order_number: "OC-001".into(),
            employee_id: 3,
            observations: None,
            subtotal: dec!(100),
            has_iva: true,
            iva: Some(dec!(19)),
            total: Some(dec!(119)),
            delivery_date: day,
            was_annulled: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        assert_eq!(order.subtotal.to_string(), "100.00");
        assert_eq!(order.iva.map(|v| v.to_string()).as_deref(), Some("19.00"));
        assert_eq!(order.total.map(|v| v.to_string()).as_deref(), Some("119.00"));
    }
}
