use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    #[sea_orm(num_value = 0)]
    Unstarted,
    #[sea_orm(num_value = 1)]
    Extrusion,
    #[sea_orm(num_value = 2)]
    Printing,
    #[sea_orm(num_value = 3)]
    Sealing,
    #[sea_orm(num_value = 4)]
    Handicraft,
    #[sea_orm(num_value = 5)]
    Warehouse,
    #[sea_orm(num_value = 6)]
    Finished,
}

/// Stage a production record hands the work order to once finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum NextStage {
    #[sea_orm(num_value = 0)]
    Finished,
    #[sea_orm(num_value = 1)]
    Extrusion,
    #[sea_orm(num_value = 2)]
    Printing,
    #[sea_orm(num_value = 3)]
    Sealing,
    #[sea_orm(num_value = 4)]
    Handicraft,
}

/// Production-tracking record derived from a purchase-order detail.
///
/// `unit_weight`, `surplus_weight` and `wo_weight` are recomputed from the
/// referenced detail's geometry and material constant on every persist.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub po_detail_id: i32,
    pub production_observations: Option<String>,
    pub surplus_percentage: Decimal,
    pub unit_weight: Decimal,
    pub surplus_weight: Decimal,
    pub wo_weight: Decimal,
    pub status: WorkOrderStatus,
    pub termination_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::po_detail::Entity",
        from = "Column::PoDetailId",
        to = "super::po_detail::Column::Id",
        on_delete = "Restrict"
    )]
    PoDetail,
    #[sea_orm(has_many = "super::extrusion::Entity")]
    Extrusions,
    #[sea_orm(has_many = "super::printing::Entity")]
    Printings,
    #[sea_orm(has_many = "super::sealing::Entity")]
    Sealings,
    #[sea_orm(has_many = "super::handicraft::Entity")]
    Handicrafts,
    #[sea_orm(has_many = "super::touch::Entity")]
    Touches,
}

impl Related<super::po_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PoDetail.def()
    }
}

impl Related<super::extrusion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extrusions.def()
    }
}

impl Related<super::touch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Touches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
