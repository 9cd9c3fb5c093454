use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::db::DbPool;
use crate::entities::packaging::{
    DieCutType, DynasTreatyFaces, FlapType, GussetsType, MeasureUnit, SealingType, TapeType,
};
use crate::entities::{material, product_type, reference};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReferencePayload {
    pub customer_id: i32,
    pub product_type_id: i32,
    pub material_id: i32,
    pub width: Decimal,
    pub length: Decimal,
    #[serde(default)]
    pub measure_unit: MeasureUnit,
    pub caliber: Decimal,
    pub film_color: String,
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
    pub sketch_url: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Decimal rendered without trailing zeros, the way the label shows sizes
/// (`20.00` prints as `20`, `3.5` stays `3.5`).
fn fmt_size(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Builds the human-readable reference label from the physical description.
///
/// Shape: `{TYPE} {MATERIAL} {width}{gussets} x {length}{flap} {unit}`,
/// then ` CAL {caliber} {finish}` when a caliber is set. Lateral gussets
/// attach to the width (` + F{n}` each), a bottom gusset to the length
/// (` + FF{n}`), a flap to the length (` + S{n}`). Tubular and
/// Semi-tubular products have no length term. The finish tag picks the
/// first match: resealable tape, security tape, then kidney, t-shirt or
/// perforation die cuts.
pub fn build_reference_label(
    product_type_name: &str,
    material_name: &str,
    payload: &ReferencePayload,
) -> String {
    let mut after_width = String::new();
    let mut after_length = String::new();

    match payload.gussets_type {
        GussetsType::Lateral => {
            if let Some(g) = payload.first_gusset.filter(|g| !g.is_zero()) {
                after_width.push_str(&format!(" + F{}", fmt_size(g)));
            }
            if let Some(g) = payload.second_gusset.filter(|g| !g.is_zero()) {
                after_width.push_str(&format!(" + F{}", fmt_size(g)));
            }
        }
        GussetsType::Bottom => {
            if let Some(g) = payload.first_gusset.filter(|g| !g.is_zero()) {
                after_length.push_str(&format!(" + FF{}", fmt_size(g)));
            }
        }
        GussetsType::None => {}
    }

    if payload.flap_type != FlapType::None {
        if let Some(s) = payload.flap_size.filter(|s| !s.is_zero()) {
            after_length.push_str(&format!(" + S{}", fmt_size(s)));
        }
    }

    after_length.push_str(match payload.measure_unit {
        MeasureUnit::Cm => " CM",
        MeasureUnit::Pulg => " PULG",
    });

    let finish = match (payload.tape, payload.die_cut_type) {
        (TapeType::Resealable, _) => "CINTA RES",
        (TapeType::Security, _) => "CINTA SEG",
        (_, DieCutType::Kidney) => "RIÑON",
        (_, DieCutType::TShirt) => "CAMISETA",
        (_, DieCutType::Perforations) => "PERFORACIONES",
        _ => "",
    };

    let length_part = if matches!(product_type_name, "Tubular" | "Semi-tubular") {
        String::new()
    } else {
        format!(" x {}", fmt_size(payload.length))
    };

    let mut label = format!(
        "{} {} {}{}{}{}",
        product_type_name.to_uppercase(),
        material_name.to_uppercase(),
        fmt_size(payload.width),
        after_width,
        length_part,
        after_length,
    );

    if payload.caliber > Decimal::ZERO {
        label.push_str(&format!(" CAL {}", fmt_size(payload.caliber)));
        if !finish.is_empty() {
            label.push_str(&format!(" {finish}"));
        }
    }

    label
}

async fn label_for(db: &DbPool, payload: &ReferencePayload) -> Result<String, ServiceError> {
    let product_type = product_type::Entity::find_by_id(payload.product_type_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Product Type".to_string()))?;
    let material = material::Entity::find_by_id(payload.material_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Material".to_string()))?;
    Ok(build_reference_label(
        &product_type.name,
        &material.name,
        payload,
    ))
}

#[instrument(skip(db, payload))]
pub async fn create_reference(
    db: &DbPool,
    payload: ReferencePayload,
) -> Result<reference::Model, ServiceError> {
    let label = label_for(db, &payload).await?;
    let now = Utc::now();
    let row = reference::ActiveModel {
        customer_id: Set(payload.customer_id),
        reference: Set(label),
        product_type_id: Set(payload.product_type_id),
        material_id: Set(payload.material_id),
        width: Set(payload.width),
        length: Set(payload.length),
        measure_unit: Set(payload.measure_unit),
        caliber: Set(payload.caliber),
        film_color: Set(payload.film_color),
        additive: Set(payload.additive),
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
        pantones_codes: Set(payload.pantones_codes),
        sketch_url: Set(payload.sketch_url),
        is_active: Set(payload.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

/// Rebuilds the label from the incoming fields; the stored label is never
/// client-supplied.
#[instrument(skip(db, payload))]
pub async fn update_reference(
    db: &DbPool,
    id: i32,
    payload: ReferencePayload,
) -> Result<reference::Model, ServiceError> {
    let old = reference::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Reference".to_string()))?;

    let label = label_for(db, &payload).await?;
    let row = reference::ActiveModel {
        id: Set(old.id),
        customer_id: Set(payload.customer_id),
        reference: Set(label),
        product_type_id: Set(payload.product_type_id),
        material_id: Set(payload.material_id),
        width: Set(payload.width),
        length: Set(payload.length),
        measure_unit: Set(payload.measure_unit),
        caliber: Set(payload.caliber),
        film_color: Set(payload.film_color),
        additive: Set(payload.additive),
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
        pantones_codes: Set(payload.pantones_codes),
        sketch_url: Set(payload.sketch_url),
        is_active: Set(payload.is_active),
        created_at: Set(old.created_at),
        updated_at: Set(Utc::now()),
    };
    Ok(row.update(db).await?)
}

#[instrument(skip(db))]
pub async fn get_reference(db: &DbPool, id: i32) -> Result<reference::Model, ServiceError> {
    reference::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Reference".to_string()))
}

#[instrument(skip(db))]
pub async fn list_references(db: &DbPool) -> Result<Vec<reference::Model>, ServiceError> {
    Ok(reference::Entity::find().all(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_reference(db: &DbPool, id: i32) -> Result<(), ServiceError> {
    let result = reference::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound("Reference".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn payload() -> ReferencePayload {
        ReferencePayload {
            customer_id: 1,
            product_type_id: 1,
            material_id: 1,
            width: dec!(20),
            length: dec!(30),
            measure_unit: MeasureUnit::Cm,
            caliber: Decimal::ZERO,
            film_color: "Transparente".into(),
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
            sketch_url: String::new(),
            is_active: true,
        }
    }

    #[test]
    fn plain_bag_label() {
        let label = build_reference_label("Bolsa", "Pebd", &payload());
        assert_eq!(label, "BOLSA PEBD 20 x 30 CM");
    }

    #[test]
    fn sizes_drop_trailing_zeros() {
        let mut p = payload();
        p.width = dec!(20.00);
        p.length = dec!(30.50);
        let label = build_reference_label("Bolsa", "Pebd", &p);
        assert_eq!(label, "BOLSA PEBD 20 x 30.5 CM");
    }

    #[test]
    fn lateral_gussets_attach_to_width() {
        let mut p = payload();
        p.gussets_type = GussetsType::Lateral;
        p.first_gusset = Some(dec!(5));
        p.second_gusset = Some(dec!(5));
        let label = build_reference_label("Bolsa", "Pebd", &p);
        assert_eq!(label, "BOLSA PEBD 20 + F5 + F5 x 30 CM");
    }

    #[test]
    fn bottom_gusset_and_flap_attach_to_length() {
        let mut p = payload();
        p.gussets_type = GussetsType::Bottom;
        p.first_gusset = Some(dec!(4));
        p.flap_type = FlapType::Internal;
        p.flap_size = Some(dec!(6));
        let label = build_reference_label("Bolsa", "Pebd", &p);
        assert_eq!(label, "BOLSA PEBD 20 x 30 + FF4 + S6 CM");
    }

    #[test]
    fn tubular_has_no_length_term() {
        let p = payload();
        let label = build_reference_label("Tubular", "Pebd", &p);
        assert_eq!(label, "TUBULAR PEBD 20 CM");
        let label = build_reference_label("Semi-tubular", "Pebd", &p);
        assert_eq!(label, "SEMI-TUBULAR PEBD 20 CM");
    }

    #[test_case(TapeType::Resealable, DieCutType::None, "CINTA RES"; "resealable tape")]
    #[test_case(TapeType::Security, DieCutType::Kidney, "CINTA SEG"; "tape wins over die cut")]
    #[test_case(TapeType::None, DieCutType::Kidney, "RIÑON"; "kidney die cut")]
    #[test_case(TapeType::None, DieCutType::TShirt, "CAMISETA"; "t-shirt die cut")]
    #[test_case(TapeType::None, DieCutType::Perforations, "PERFORACIONES"; "perforations")]
    fn finish_tag_priority(tape: TapeType, die_cut: DieCutType, finish: &str) {
        let mut p = payload();
        p.caliber = dec!(3);
        p.tape = tape;
        p.die_cut_type = die_cut;
        let label = build_reference_label("Bolsa", "Pebd", &p);
        assert_eq!(label, format!("BOLSA PEBD 20 x 30 CM CAL 3 {finish}"));
    }

    #[test]
    fn caliber_without_finish_has_no_trailing_space() {
        let mut p = payload();
        p.caliber = dec!(2.5);
        let label = build_reference_label("Bolsa", "Pebd", &p);
        assert_eq!(label, "BOLSA PEBD 20 x 30 CM CAL 2.5");
    }

    #[test]
    fn inches_unit() {
        let mut p = payload();
        p.measure_unit = MeasureUnit::Pulg;
        let label = build_reference_label("Bolsa", "Pebd", &p);
        assert_eq!(label, "BOLSA PEBD 20 x 30 PULG");
    }
}
