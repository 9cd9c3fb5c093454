//! Field-level change logging for the order aggregate (PurchaseOrder,
//! Payment, PODetail).
//!
//! Each entity declares its auditable fields explicitly; there is no
//! reflection. Derived columns (`iva`, `total`) and the immutable
//! `wo_number` are deliberately not listed: the log captures caller
//! edits, one append-only row per changed field. Callers run the diff and
//! the guarded update inside one transaction so the "old" values always
//! reflect what was durably stored.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveEnum, ConnectionTrait, EntityTrait, Set};

use crate::entities::po_change_log::{self, AuditedModel};
use crate::entities::{payment, po_detail, purchase_order};
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field_name: &'static str,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

/// Renders a field value as the text stored in the change log. Typed
/// enums log their stored database code, `None` logs as SQL NULL.
pub trait LogValue {
    fn log_value(&self) -> Option<String>;
}

macro_rules! log_value_via_to_string {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl LogValue for $ty {
                fn log_value(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )+
    };
}

log_value_via_to_string!(
    i32,
    i64,
    bool,
    String,
    Decimal,
    chrono::NaiveDate,
    serde_json::Value,
);

impl LogValue for chrono::DateTime<Utc> {
    fn log_value(&self) -> Option<String> {
        Some(self.to_rfc3339())
    }
}

impl<T: LogValue> LogValue for Option<T> {
    fn log_value(&self) -> Option<String> {
        self.as_ref().and_then(LogValue::log_value)
    }
}

macro_rules! log_value_via_active_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl LogValue for $ty {
                fn log_value(&self) -> Option<String> {
                    Some(self.to_value().to_string())
                }
            }
        )+
    };
}

log_value_via_active_enum!(
    crate::entities::packaging::MeasureUnit,
    crate::entities::packaging::SealingType,
    crate::entities::packaging::FlapType,
    crate::entities::packaging::GussetsType,
    crate::entities::packaging::TapeType,
    crate::entities::packaging::DieCutType,
    crate::entities::packaging::DynasTreatyFaces,
    crate::entities::payment::PaymentMethod,
);

macro_rules! diff_fields {
    ($changes:ident, $old:expr, $new:expr, [$($field:ident),+ $(,)?]) => {
        $(
            if $old.$field != $new.$field {
                $changes.push(FieldChange {
                    field_name: stringify!($field),
                    old_value: $old.$field.log_value(),
                    new_value: $new.$field.log_value(),
                });
            }
        )+
    };
}

pub fn diff_purchase_order(
    old: &purchase_order::Model,
    new: &purchase_order::Model,
) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    diff_fields!(
        changes,
        old,
        new,
        [
            order_date,
            customer_id,
            order_number,
            employee_id,
            observations,
            subtotal,
            has_iva,
            delivery_date,
            was_annulled,
        ]
    );
    changes
}

pub fn diff_payment(old: &payment::Model, new: &payment::Model) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    diff_fields!(changes, old, new, [payment_method, payment_term, advance]);
    changes
}

pub fn diff_po_detail(old: &po_detail::Model, new: &po_detail::Model) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    diff_fields!(
        changes,
        old,
        new,
        [
            purchase_order_id,
            reference_id,
            reference_internal,
            product_type_id,
            material_id,
            width,
            length,
            measure_unit,
            caliber,
            film_color,
            kilograms,
            units,
            kilogram_price,
            unit_price,
            additive,
            sealing_type,
            flap_type,
            flap_size,
            gussets_type,
            first_gusset,
            second_gusset,
            tape,
            die_cut_type,
            roller_size,
            dynas_treaty_faces,
            pantones_quantity,
            pantones_codes,
            production_observations,
            delivery_location,
            is_new_sketch,
            sketch_url,
            was_annulled,
        ]
    );
    changes
}

/// Appends one change-log row per changed field. Runs on the caller's
/// connection, typically the transaction wrapping the update itself.
pub async fn record_changes<C: ConnectionTrait>(
    conn: &C,
    model_name: AuditedModel,
    record_id: i32,
    changes: Vec<FieldChange>,
) -> Result<(), ServiceError> {
    if changes.is_empty() {
        return Ok(());
    }
    let now = Utc::now();
    let rows = changes.into_iter().map(|change| po_change_log::ActiveModel {
        model_name: Set(model_name),
        record_id: Set(record_id),
        field_name: Set(change.field_name.to_string()),
        old_value: Set(change.old_value),
        new_value: Set(change.new_value),
        change_date: Set(now),
        ..Default::default()
    });
    po_change_log::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn order(subtotal: Decimal, observations: Option<&str>) -> purchase_order::Model {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        purchase_order::Model {
            id: 1,
            order_date: day,
            customer_id: 7,
            order_number: "OC-001".into(),
            employee_id: 3,
            observations: observations.map(Into::into),
            subtotal,
            has_iva: true,
            iva: Some(dec!(19.00)),
            total: Some(dec!(119.00)),
            delivery_date: day,
            was_annulled: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unchanged_order_produces_no_entries() {
        let a = order(dec!(100.00), None);
        assert!(diff_purchase_order(&a, &a.clone()).is_empty());
    }

    #[test]
    fn subtotal_change_produces_single_entry_with_rendered_values() {
        let old = order(dec!(100.00), None);
        let new = order(dec!(150.00), None);
        let changes = diff_purchase_order(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field_name, "subtotal");
        assert_eq!(changes[0].old_value.as_deref(), Some("100.00"));
        assert_eq!(changes[0].new_value.as_deref(), Some("150.00"));
    }

    #[test]
    fn two_field_edit_produces_two_entries() {
        let old = order(dec!(100.00), None);
        let new = order(dec!(150.00), Some("rush order"));
        let changes = diff_purchase_order(&old, &new);
        assert_eq!(changes.len(), 2);
        let names: Vec<_> = changes.iter().map(|c| c.field_name).collect();
        assert!(names.contains(&"subtotal"));
        assert!(names.contains(&"observations"));
    }

    #[test]
    fn none_renders_as_null() {
        let old = order(dec!(100.00), Some("old note"));
        let new = order(dec!(100.00), None);
        let changes = diff_purchase_order(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].old_value.as_deref(), Some("old note"));
        assert_eq!(changes[0].new_value, None);
    }

    #[test]
    fn derived_totals_are_not_audited() {
        let old = order(dec!(100.00), None);
        let mut new = order(dec!(100.00), None);
        new.iva = Some(dec!(28.50));
        new.total = Some(dec!(178.50));
        assert!(diff_purchase_order(&old, &new).is_empty());
    }
}
