use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::packaging::{
    DieCutType, DynasTreatyFaces, FlapType, GussetsType, MeasureUnit, SealingType, TapeType,
};

/// A packaging product specification owned by a customer.
///
/// `reference` is a computed human-readable label rebuilt on every save
/// from the other fields; clients never supply it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "references")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    #[sea_orm(column_type = "Text")]
    pub reference: String,
    pub product_type_id: i32,
    pub material_id: i32,
    pub width: Decimal,
    pub length: Decimal,
    pub measure_unit: MeasureUnit,
    pub caliber: Decimal,
    pub film_color: String,
    pub additive: Option<Json>,
    pub sealing_type: SealingType,
    pub flap_type: FlapType,
    pub flap_size: Option<Decimal>,
    pub gussets_type: GussetsType,
    pub first_gusset: Option<Decimal>,
    pub second_gusset: Option<Decimal>,
    pub tape: TapeType,
    pub die_cut_type: DieCutType,
    pub roller_size: Decimal,
    pub dynas_treaty_faces: DynasTreatyFaces,
    pub pantones_quantity: i64,
    pub pantones_codes: Option<Json>,
    pub sketch_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_delete = "Cascade"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::product_type::Entity",
        from = "Column::ProductTypeId",
        to = "super::product_type::Column::Id",
        on_delete = "Restrict"
    )]
    ProductType,
    #[sea_orm(
        belongs_to = "super::material::Entity",
        from = "Column::MaterialId",
        to = "super::material::Column::Id",
        on_delete = "Restrict"
    )]
    Material,
    #[sea_orm(has_many = "super::po_detail::Entity")]
    PoDetails,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::product_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductType.def()
    }
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl Related<super::po_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PoDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
