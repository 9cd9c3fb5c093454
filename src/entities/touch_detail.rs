use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "touch_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub touch_id: i32,
    pub employee_id: i32,
    pub finished_weight: Decimal,
    pub finished_units: Option<i32>,
    pub waste_weight: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::touch::Entity",
        from = "Column::TouchId",
        to = "super::touch::Column::Id",
        on_delete = "Cascade"
    )]
    Touch,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_delete = "Restrict"
    )]
    Employee,
}

impl Related<super::touch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Touch.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
