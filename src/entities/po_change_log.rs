use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum AuditedModel {
    #[sea_orm(string_value = "PurchaseOrder")]
    PurchaseOrder,
    #[sea_orm(string_value = "PODetail")]
    #[serde(rename = "PODetail")]
    PoDetail,
    #[sea_orm(string_value = "Payment")]
    Payment,
}

/// Append-only audit record: one row per changed field per update of a
/// purchase order, payment or order detail. Never mutated or deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "po_change_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model_name: AuditedModel,
    pub record_id: i32,
    pub field_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub old_value: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub new_value: Option<String>,
    pub change_date: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
