use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw-material consumption line of an extrusion run.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "extrusion_raw_materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub extrusion_id: i32,
    pub raw_material_id: i32,
    pub quantity: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::extrusion::Entity",
        from = "Column::ExtrusionId",
        to = "super::extrusion::Column::Id",
        on_delete = "Cascade"
    )]
    Extrusion,
    #[sea_orm(
        belongs_to = "super::raw_material::Entity",
        from = "Column::RawMaterialId",
        to = "super::raw_material::Column::Id",
        on_delete = "Restrict"
    )]
    RawMaterial,
}

impl Related<super::extrusion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extrusion.def()
    }
}

impl Related<super::raw_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RawMaterial.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
