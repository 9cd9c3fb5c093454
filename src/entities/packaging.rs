//! Categorical physical attributes shared by `Reference` and `PODetail`.
//!
//! Stored as their integer codes so existing data keeps its meaning; the
//! JSON surface uses the variant names.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum MeasureUnit {
    #[default]
    #[sea_orm(num_value = 0)]
    Cm,
    #[sea_orm(num_value = 1)]
    Pulg,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum SealingType {
    #[default]
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    Lateral,
    #[sea_orm(num_value = 2)]
    Bottom,
    #[sea_orm(num_value = 3)]
    Manual,
    #[sea_orm(num_value = 4)]
    Precut,
    #[sea_orm(num_value = 5)]
    VShape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum FlapType {
    #[default]
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    Internal,
    #[sea_orm(num_value = 2)]
    InternalDouble,
    #[sea_orm(num_value = 3)]
    External,
    #[sea_orm(num_value = 4)]
    Flown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum GussetsType {
    #[default]
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    Lateral,
    #[sea_orm(num_value = 2)]
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum TapeType {
    #[default]
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    Resealable,
    #[sea_orm(num_value = 2)]
    Security,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum DieCutType {
    #[default]
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    Kidney,
    #[sea_orm(num_value = 2)]
    TShirt,
    #[sea_orm(num_value = 3)]
    Perforations,
    #[sea_orm(num_value = 4)]
    Pennant,
    #[sea_orm(num_value = 5)]
    Cord,
    #[sea_orm(num_value = 6)]
    DressCover,
    #[sea_orm(num_value = 7)]
    HalfMoon,
    #[sea_orm(num_value = 8)]
    ReinforcementSeal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum DynasTreatyFaces {
    #[default]
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    OneFace,
    #[sea_orm(num_value = 2)]
    TwoFaces,
}
