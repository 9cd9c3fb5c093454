use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::work_order::NextStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum RollType {
    #[sea_orm(num_value = 0)]
    Tubular,
    #[sea_orm(num_value = 1)]
    SemiTubular,
    #[sea_orm(num_value = 2)]
    Sheet,
    #[sea_orm(num_value = 3)]
    DoubleSheet,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "extrusions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub work_order_id: i32,
    pub machine_id: i32,
    pub roll_type: RollType,
    pub rolls_quantity: i32,
    pub caliber: Decimal,
    #[sea_orm(column_type = "Text")]
    pub observations: String,
    pub next: NextStage,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::work_order::Entity",
        from = "Column::WorkOrderId",
        to = "super::work_order::Column::Id",
        on_delete = "Cascade"
    )]
    WorkOrder,
    #[sea_orm(
        belongs_to = "super::machine::Entity",
        from = "Column::MachineId",
        to = "super::machine::Column::Id",
        on_delete = "Restrict"
    )]
    Machine,
    #[sea_orm(has_many = "super::extrusion_raw_material::Entity")]
    RawMaterials,
}

impl Related<super::work_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrder.def()
    }
}

impl Related<super::machine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Machine.def()
    }
}

impl Related<super::extrusion_raw_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RawMaterials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
