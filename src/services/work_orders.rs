use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::packaging::{FlapType, GussetsType};
use crate::entities::work_order::{self, WorkOrderStatus};
use crate::entities::{material, po_detail};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkOrderPayload {
    pub po_detail_id: i32,
    pub production_observations: Option<String>,
    pub surplus_percentage: Decimal,
    #[serde(default = "default_status")]
    pub status: WorkOrderStatus,
    pub termination_reason: Option<String>,
}

fn default_status() -> WorkOrderStatus {
    WorkOrderStatus::Unstarted
}

/// Derived weights for a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub unit_weight: Decimal,
    pub surplus_weight: Decimal,
    pub wo_weight: Decimal,
}

/// Derives the three weights from the detail's geometry and the material
/// weight constant.
///
/// Lateral gussets widen the sheet, a bottom gusset lengthens it and a
/// flap adds half its size to the length. `unit_weight` is grams per unit.
/// When the detail was sold by kilograms that quantity drives the order
/// weight directly; otherwise the unit count is converted to kilograms and
/// rounded up whenever the fraction reaches a hundredth. The surplus is a
/// straight percentage on top.
pub fn compute_weights(
    detail: &po_detail::Model,
    weight_constant: Decimal,
    surplus_percentage: Decimal,
) -> Weights {
    let mut width = detail.width;
    let mut length = detail.length;

    match detail.gussets_type {
        GussetsType::Lateral => {
            width += detail.first_gusset.unwrap_or(Decimal::ZERO)
                + detail.second_gusset.unwrap_or(Decimal::ZERO);
        }
        GussetsType::Bottom => {
            length += detail.first_gusset.unwrap_or(Decimal::ZERO);
        }
        GussetsType::None => {}
    }

    if detail.flap_type != FlapType::None {
        length += detail.flap_size.unwrap_or(Decimal::ZERO) / Decimal::TWO;
    }

    let unit_weight = (width * length * detail.caliber * weight_constant).round_dp(2);

    let (surplus_weight, wo_weight) = if detail.kilograms > Decimal::ZERO {
        let surplus = (detail.kilograms * surplus_percentage / Decimal::ONE_HUNDRED).round_dp(2);
        (surplus, detail.kilograms + surplus)
    } else {
        let raw = unit_weight * Decimal::from(detail.units) / Decimal::ONE_THOUSAND;
        let fraction = raw - raw.trunc();
        let kilograms = if fraction >= Decimal::new(1, 2) {
            raw.ceil()
        } else {
            raw.trunc()
        };
        let surplus = (kilograms * surplus_percentage / Decimal::ONE_HUNDRED).round_dp(2);
        (surplus, kilograms + surplus)
    };

    Weights {
        unit_weight,
        surplus_weight,
        wo_weight: wo_weight.round_dp(2),
    }
}

async fn weights_for(
    db: &DbPool,
    po_detail_id: i32,
    surplus_percentage: Decimal,
) -> Result<Weights, ServiceError> {
    let detail = po_detail::Entity::find_by_id(po_detail_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("P O Detail".to_string()))?;
    let material = detail
        .find_related(material::Entity)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Material".to_string()))?;
    Ok(compute_weights(
        &detail,
        material.weight_constant,
        surplus_percentage,
    ))
}

#[instrument(skip(db, payload))]
pub async fn create_work_order(
    db: &DbPool,
    payload: WorkOrderPayload,
) -> Result<work_order::Model, ServiceError> {
    let weights = weights_for(db, payload.po_detail_id, payload.surplus_percentage).await?;
    let now = Utc::now();
    let row = work_order::ActiveModel {
        po_detail_id: Set(payload.po_detail_id),
        production_observations: Set(payload.production_observations),
        surplus_percentage: Set(payload.surplus_percentage),
        unit_weight: Set(weights.unit_weight),
        surplus_weight: Set(weights.surplus_weight),
        wo_weight: Set(weights.wo_weight),
        status: Set(payload.status),
        termination_reason: Set(payload.termination_reason),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

/// The weights are derived on every persist, so an update re-reads the
/// detail and recomputes them rather than trusting stored values.
#[instrument(skip(db, payload))]
pub async fn update_work_order(
    db: &DbPool,
    id: i32,
    payload: WorkOrderPayload,
) -> Result<work_order::Model, ServiceError> {
    let old = work_order::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Work Order".to_string()))?;

    let weights = weights_for(db, payload.po_detail_id, payload.surplus_percentage).await?;
    let row = work_order::ActiveModel {
        id: Set(old.id),
        po_detail_id: Set(payload.po_detail_id),
        production_observations: Set(payload.production_observations),
        surplus_percentage: Set(payload.surplus_percentage),
        unit_weight: Set(weights.unit_weight),
        surplus_weight: Set(weights.surplus_weight),
        wo_weight: Set(weights.wo_weight),
        status: Set(payload.status),
        termination_reason: Set(payload.termination_reason),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    Ok(row.update(db).await?)
}

#[instrument(skip(db))]
pub async fn get_work_order(db: &DbPool, id: i32) -> Result<work_order::Model, ServiceError> {
    work_order::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Work Order".to_string()))
}

#[instrument(skip(db))]
pub async fn list_work_orders(db: &DbPool) -> Result<Vec<work_order::Model>, ServiceError> {
    Ok(work_order::Entity::find().all(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_work_order(db: &DbPool, id: i32) -> Result<(), ServiceError> {
    let result = work_order::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound("Work Order".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::packaging::{
        DieCutType, DynasTreatyFaces, MeasureUnit, SealingType, TapeType,
    };
    use rust_decimal_macros::dec;

    fn detail() -> po_detail::Model {
        let now = Utc::now();
        po_detail::Model {
            id: 1,
            purchase_order_id: 1,
            reference_id: 1,
            reference_internal: "BOLSA PEBD 20 x 30 CM".into(),
            product_type_id: 1,
            material_id: 1,
            width: dec!(20),
            length: dec!(30),
            measure_unit: MeasureUnit::Cm,
            caliber: dec!(2),
            film_color: "Transparente".into(),
            kilograms: Decimal::ZERO,
            units: 10000,
            kilogram_price: dec!(9500),
            unit_price: Decimal::ZERO,
            additive: None,
            sealing_type: SealingType::Lateral,
            flap_type: FlapType::None,
            flap_size: None,
            gussets_type: GussetsType::None,
            first_gusset: None,
            second_gusset: None,
            tape: TapeType::None,
            die_cut_type: DieCutType::None,
            roller_size: Decimal::ZERO,
            dynas_treaty_faces: DynasTreatyFaces::None,
            pantones_quantity: 0,
            pantones_codes: None,
            production_observations: None,
            delivery_location: "Bodega".into(),
            is_new_sketch: false,
            sketch_url: String::new(),
            was_annulled: false,
            created_at: now,
            updated_at: now,
            wo_number: 1,
        }
    }

    #[test]
    fn units_path_with_surplus() {
        // 20 * 30 * 2 * 0.0306 = 36.72 g per unit
        // 36.72 * 10000 / 1000 = 367.2 -> rounds up to 368
        let w = compute_weights(&detail(), dec!(0.0306), dec!(5));
        assert_eq!(w.unit_weight, dec!(36.72));
        assert_eq!(w.surplus_weight, dec!(18.40));
        assert_eq!(w.wo_weight, dec!(386.40));
    }

    #[test]
    fn kilograms_path_skips_unit_conversion() {
        let mut d = detail();
        d.kilograms = dec!(500);
        let w = compute_weights(&d, dec!(0.0306), dec!(10));
        assert_eq!(w.surplus_weight, dec!(50.00));
        assert_eq!(w.wo_weight, dec!(550.00));
    }

    #[test]
    fn sub_kilogram_quantity_rounds_up() {
        let mut d = detail();
        d.units = 1;
        // 36.72 / 1000 = 0.03672 -> fraction over a hundredth -> ceil to 1
        let w = compute_weights(&d, dec!(0.0306), Decimal::ZERO);
        assert_eq!(w.wo_weight, dec!(1.00));
    }

    #[test]
    fn negligible_fraction_truncates() {
        let mut d = detail();
        d.width = dec!(10);
        d.length = dec!(10);
        d.caliber = dec!(1);
        d.units = 4002;
        // 10 * 10 * 1 * 0.0025 = 0.25 g; 0.25 * 4002 / 1000 = 1.0005 -> 1
        let w = compute_weights(&d, dec!(0.0025), Decimal::ZERO);
        assert_eq!(w.wo_weight, dec!(1.00));
    }

    #[test]
    fn lateral_gussets_widen_the_sheet() {
        let mut d = detail();
        d.gussets_type = GussetsType::Lateral;
        d.first_gusset = Some(dec!(5));
        d.second_gusset = Some(dec!(5));
        // width 30 * length 30 * 2 * 0.0306 = 55.08
        let w = compute_weights(&d, dec!(0.0306), Decimal::ZERO);
        assert_eq!(w.unit_weight, dec!(55.08));
    }

    #[test]
    fn bottom_gusset_and_flap_lengthen_the_sheet() {
        let mut d = detail();
        d.gussets_type = GussetsType::Bottom;
        d.first_gusset = Some(dec!(4));
        d.flap_type = FlapType::Internal;
        d.flap_size = Some(dec!(6));
        // length 30 + 4 + 3 = 37; 20 * 37 * 2 * 0.0306 = 45.288 -> 45.29
        let w = compute_weights(&d, dec!(0.0306), Decimal::ZERO);
        assert_eq!(w.unit_weight, dec!(45.29));
    }

    #[test]
    fn exact_integer_quantity_is_kept() {
        let mut d = detail();
        d.units = 1000;
        // 36.72 * 1000 / 1000 = 36.72 -> fraction 0.72 -> ceil to 37
        let w = compute_weights(&d, dec!(0.0306), Decimal::ZERO);
        assert_eq!(w.wo_weight, dec!(37.00));
        // a clean multiple stays put: 25 g/unit over 2000 units = 50 exactly
        d.units = 2000;
        d.caliber = dec!(1);
        // 20 * 30 * 1 * 0.0306 = 18.36 g -> 36.72 -> ceil 37; use round figures
        d.width = dec!(25);
        d.length = dec!(40);
        // 25 * 40 * 1 * 0.025 = 25.00 g -> 50 kg exactly
        let w = compute_weights(&d, dec!(0.025), Decimal::ZERO);
        assert_eq!(w.wo_weight, dec!(50.00));
    }
}
