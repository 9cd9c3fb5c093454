use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::packaging::{
    DieCutType, DynasTreatyFaces, FlapType, GussetsType, MeasureUnit, SealingType, TapeType,
};

/// One line item of a purchase order, fully specifying the packaging
/// product variant to manufacture. Carries its own copy of the physical
/// description so later edits to the `Reference` do not rewrite history.
///
/// `wo_number` is the globally unique, monotonically increasing work-order
/// sequence number assigned at creation time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "po_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub purchase_order_id: i32,
    pub reference_id: i32,
    pub reference_internal: String,
    pub product_type_id: i32,
    pub material_id: i32,
    pub width: Decimal,
    pub length: Decimal,
    pub measure_unit: MeasureUnit,
    pub caliber: Decimal,
    pub film_color: String,
    pub kilograms: Decimal,
    pub units: i32,
    pub kilogram_price: Decimal,
    pub unit_price: Decimal,
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
    pub production_observations: Option<String>,
    pub delivery_location: String,
    pub is_new_sketch: bool,
    pub sketch_url: String,
    pub was_annulled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sea_orm(unique)]
    pub wo_number: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::purchase_order::Entity",
        from = "Column::PurchaseOrderId",
        to = "super::purchase_order::Column::Id",
        on_delete = "Cascade"
    )]
    PurchaseOrder,
    #[sea_orm(
        belongs_to = "super::reference::Entity",
        from = "Column::ReferenceId",
        to = "super::reference::Column::Id",
        on_delete = "Restrict"
    )]
    Reference,
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
    #[sea_orm(has_many = "super::work_order::Entity")]
    WorkOrders,
}

impl Related<super::purchase_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrder.def()
    }
}

impl Related<super::reference::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reference.def()
    }
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl Related<super::work_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
