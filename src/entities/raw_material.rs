use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum RawMaterialType {
    #[sea_orm(num_value = 0)]
    Prime,
    #[sea_orm(num_value = 1)]
    Recovered,
    #[sea_orm(num_value = 2)]
    Additives,
    #[sea_orm(num_value = 3)]
    InksAndPigments,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "raw_materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub quantity: Decimal,
    pub raw_material_type: RawMaterialType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::extrusion_raw_material::Entity")]
    ExtrusionRawMaterials,
}

impl Related<super::extrusion_raw_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExtrusionRawMaterials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
