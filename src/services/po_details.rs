use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::Deserialize;
use tracing::{instrument, warn};
use validator::Validate;

use crate::db::DbPool;
use crate::entities::packaging::{
    DieCutType, DynasTreatyFaces, FlapType, GussetsType, MeasureUnit, SealingType, TapeType,
};
use crate::entities::po_change_log::AuditedModel;
use crate::entities::{po_detail, purchase_order};
use crate::errors::ServiceError;
use crate::services::{audit, is_unique_violation};

/// Bounded retries for work-order-number allocation. The number is taken
/// inside the insert transaction and guarded by a unique index, so a retry
/// only happens when two creations race for the same value.
const WO_NUMBER_MAX_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PoDetailPayload {
    pub purchase_order_id: i32,
    pub reference_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub reference_internal: String,
    pub product_type_id: i32,
    pub material_id: i32,
    pub width: Decimal,
    pub length: Decimal,
    #[serde(default)]
    pub measure_unit: MeasureUnit,
    pub caliber: Decimal,
    pub film_color: String,
    pub kilograms: Decimal,
    pub units: i32,
    pub kilogram_price: Decimal,
    pub unit_price: Decimal,
    pub additive: Option<serde_json::Value>,
    #[serde(default)]
    pub sealing_type: SealingType,
    #[serde(default)]
    pub flap_type: FlapType,
    pub flap_size: Option<Decimal>,
    #[serde(default)]
    pub gussets_type: GussetsType,
    pub first_gusset: Option<Decimal>,
    pub second_gusset: Option<Decimal>,
    #[serde(default)]
    pub tape: TapeType,
    #[serde(default)]
    pub die_cut_type: DieCutType,
    pub roller_size: Decimal,
    #[serde(default)]
    pub dynas_treaty_faces: DynasTreatyFaces,
    pub pantones_quantity: i64,
    pub pantones_codes: Option<serde_json::Value>,
    pub production_observations: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub delivery_location: String,
    #[serde(default)]
    pub is_new_sketch: bool,
    pub sketch_url: String,
    #[serde(default)]
    pub was_annulled: bool,
}

/// Highest assigned work-order number plus one, or 1 when none exist.
async fn next_wo_number<C: ConnectionTrait>(conn: &C) -> Result<i64, ServiceError> {
    let last = po_detail::Entity::find()
        .select_only()
        .column(po_detail::Column::WoNumber)
        .order_by_desc(po_detail::Column::WoNumber)
        .limit(1)
        .into_tuple::<i64>()
        .one(conn)
        .await?;
    Ok(last.unwrap_or(0) + 1)
}

/// Creates an order detail, assigning the next work-order number.
///
/// The referenced purchase order must already exist; that check runs
/// before any other validation. Allocation is serialized by taking the
/// current maximum inside the insert transaction and retrying on the
/// unique-index conflict that signals a lost race.
#[instrument(skip(db, payload))]
pub async fn create_po_detail(
    db: &DbPool,
    payload: PoDetailPayload,
) -> Result<po_detail::Model, ServiceError> {
    let order = purchase_order::Entity::find_by_id(payload.purchase_order_id)
        .one(db)
        .await?;
    if order.is_none() {
        return Err(ServiceError::PreconditionFailed(
            "Purchase Order does not exist.".to_string(),
        ));
    }

    payload
        .validate()
        .map_err(|errors| ServiceError::ValidationFailed {
            action: "create",
            model: "p o detail".to_string(),
            errors,
        })?;

    for attempt in 1..=WO_NUMBER_MAX_ATTEMPTS {
        let txn = db.begin().await?;
        let wo_number = next_wo_number(&txn).await?;
        let row = active_model_from(&payload, wo_number);

        match row.insert(&txn).await {
            Ok(detail) => {
                txn.commit().await?;
                return Ok(detail);
            }
            Err(err) if is_unique_violation(&err) && attempt < WO_NUMBER_MAX_ATTEMPTS => {
                txn.rollback().await?;
                warn!(wo_number, attempt, "work-order number taken, retrying");
            }
            Err(err) => {
                txn.rollback().await?;
                return Err(err.into());
            }
        }
    }

    Err(ServiceError::Conflict(
        "Could not allocate a work-order number.".to_string(),
    ))
}

fn active_model_from(payload: &PoDetailPayload, wo_number: i64) -> po_detail::ActiveModel {
    let now = Utc::now();
    po_detail::ActiveModel {
        purchase_order_id: Set(payload.purchase_order_id),
        reference_id: Set(payload.reference_id),
        reference_internal: Set(payload.reference_internal.clone()),
        product_type_id: Set(payload.product_type_id),
        material_id: Set(payload.material_id),
        width: Set(payload.width),
        length: Set(payload.length),
        measure_unit: Set(payload.measure_unit),
        caliber: Set(payload.caliber),
        film_color: Set(payload.film_color.clone()),
        kilograms: Set(payload.kilograms),
        units: Set(payload.units),
        kilogram_price: Set(payload.kilogram_price),
        unit_price: Set(payload.unit_price),
        additive: Set(payload.additive.clone()),
        sealing_type: Set(payload.sealing_type),
        flap_type: Set(payload.flap_type),
        flap_size: Set(payload.flap_size),
        gussets_type: Set(payload.gussets_type),
        first_gusset: Set(payload.first_gusset),
        second_gusset: Set(payload.second_gusset),
        tape: Set(payload.tape),
        die_cut_type: Set(payload.die_cut_type),
        roller_size: Set(payload.roller_size),
        dynas_treaty_faces: Set(payload.dynas_treaty_faces),
        pantones_quantity: Set(payload.pantones_quantity),
        pantones_codes: Set(payload.pantones_codes.clone()),
        production_observations: Set(payload.production_observations.clone()),
        delivery_location: Set(payload.delivery_location.clone()),
        is_new_sketch: Set(payload.is_new_sketch),
        sketch_url: Set(payload.sketch_url.clone()),
        was_annulled: Set(payload.was_annulled),
        created_at: Set(now),
        updated_at: Set(now),
        wo_number: Set(wo_number),
        ..Default::default()
    }
}

/// Updates a detail, preserving its work-order number and logging one
/// change row per edited field in the same transaction.
#[instrument(skip(db, payload))]
pub async fn update_po_detail(
    db: &DbPool,
    id: i32,
    payload: PoDetailPayload,
) -> Result<po_detail::Model, ServiceError> {
    let txn = db.begin().await?;

    let old = po_detail::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound("P O Detail".to_string()))?;

    let new_state = po_detail::Model {
        id: old.id,
        purchase_order_id: payload.purchase_order_id,
        reference_id: payload.reference_id,
        reference_internal: payload.reference_internal,
        product_type_id: payload.product_type_id,
        material_id: payload.material_id,
        width: payload.width,
        length: payload.length,
        measure_unit: payload.measure_unit,
        caliber: payload.caliber,
        film_color: payload.film_color,
        kilograms: payload.kilograms,
        units: payload.units,
        kilogram_price: payload.kilogram_price,
        unit_price: payload.unit_price,
        additive: payload.additive,
        sealing_type: payload.sealing_type,
        flap_type: payload.flap_type,
        flap_size: payload.flap_size,
        gussets_type: payload.gussets_type,
        first_gusset: payload.first_gusset,
        second_gusset: payload.second_gusset,
        tape: payload.tape,
        die_cut_type: payload.die_cut_type,
        roller_size: payload.roller_size,
        dynas_treaty_faces: payload.dynas_treaty_faces,
        pantones_quantity: payload.pantones_quantity,
        pantones_codes: payload.pantones_codes,
        production_observations: payload.production_observations,
        delivery_location: payload.delivery_location,
        is_new_sketch: payload.is_new_sketch,
        sketch_url: payload.sketch_url,
        was_annulled: payload.was_annulled,
        created_at: old.created_at,
        updated_at: Utc::now(),
        wo_number: old.wo_number,
    };

    let changes = audit::diff_po_detail(&old, &new_state);
    audit::record_changes(&txn, AuditedModel::PoDetail, old.id, changes).await?;

    let mut row: po_detail::ActiveModel = active_model_from_model(&new_state);
    row.id = Set(new_state.id);
    let updated = row.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

fn active_model_from_model(model: &po_detail::Model) -> po_detail::ActiveModel {
    po_detail::ActiveModel {
        purchase_order_id: Set(model.purchase_order_id),
        reference_id: Set(model.reference_id),
        reference_internal: Set(model.reference_internal.clone()),
        product_type_id: Set(model.product_type_id),
        material_id: Set(model.material_id),
        width: Set(model.width),
        length: Set(model.length),
        measure_unit: Set(model.measure_unit),
        caliber: Set(model.caliber),
        film_color: Set(model.film_color.clone()),
        kilograms: Set(model.kilograms),
        units: Set(model.units),
        kilogram_price: Set(model.kilogram_price),
        unit_price: Set(model.unit_price),
        additive: Set(model.additive.clone()),
        sealing_type: Set(model.sealing_type),
        flap_type: Set(model.flap_type),
        flap_size: Set(model.flap_size),
        gussets_type: Set(model.gussets_type),
        first_gusset: Set(model.first_gusset),
        second_gusset: Set(model.second_gusset),
        tape: Set(model.tape),
        die_cut_type: Set(model.die_cut_type),
        roller_size: Set(model.roller_size),
        dynas_treaty_faces: Set(model.dynas_treaty_faces),
        pantones_quantity: Set(model.pantones_quantity),
        pantones_codes: Set(model.pantones_codes.clone()),
        production_observations: Set(model.production_observations.clone()),
        delivery_location: Set(model.delivery_location.clone()),
        is_new_sketch: Set(model.is_new_sketch),
        sketch_url: Set(model.sketch_url.clone()),
        was_annulled: Set(model.was_annulled),
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
        wo_number: Set(model.wo_number),
        ..Default::default()
    }
}

#[instrument(skip(db))]
pub async fn get_po_detail(db: &DbPool, id: i32) -> Result<po_detail::Model, ServiceError> {
    po_detail::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("P O Detail".to_string()))
}

#[instrument(skip(db))]
pub async fn list_po_details(db: &DbPool) -> Result<Vec<po_detail::Model>, ServiceError> {
    Ok(po_detail::Entity::find().all(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_po_detail(db: &DbPool, id: i32) -> Result<(), ServiceError> {
    let result = po_detail::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound("P O Detail".to_string()));
    }
    Ok(())
}
