use sea_orm_migration::prelude::*;

use crate::m20250501_000001_create_business_tables::{Employees, PoDetails};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suppliers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Suppliers::CompanyName).string().not_null())
                    .col(ColumnDef::new(Suppliers::Email).string().null().unique_key())
                    .col(ColumnDef::new(Suppliers::PhoneNumber).string().null())
                    .col(ColumnDef::new(Suppliers::Contact).string().null())
                    .col(
                        ColumnDef::new(Suppliers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Suppliers::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Suppliers::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RawMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RawMaterials::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RawMaterials::Name).string().not_null())
                    .col(
                        ColumnDef::new(RawMaterials::Quantity)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::RawMaterialType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RawMaterials::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(RawMaterials::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(RawMaterials::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Machines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Machines::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Machines::Name).string().not_null())
                    .col(
                        ColumnDef::new(Machines::Area)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Machines::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Machines::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Machines::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkOrders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkOrders::PoDetailId).integer().not_null())
                    .col(ColumnDef::new(WorkOrders::ProductionObservations).text().null())
                    .col(
                        ColumnDef::new(WorkOrders::SurplusPercentage)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkOrders::UnitWeight)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkOrders::SurplusWeight)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkOrders::WoWeight)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkOrders::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(WorkOrders::TerminationReason).text().null())
                    .col(ColumnDef::new(WorkOrders::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(WorkOrders::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_orders_po_detail")
                            .from(WorkOrders::Table, WorkOrders::PoDetailId)
                            .to(PoDetails::Table, PoDetails::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Extrusions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Extrusions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Extrusions::WorkOrderId).integer().not_null())
                    .col(ColumnDef::new(Extrusions::MachineId).integer().not_null())
                    .col(
                        ColumnDef::new(Extrusions::RollType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Extrusions::RollsQuantity).integer().not_null())
                    .col(ColumnDef::new(Extrusions::Caliber).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Extrusions::Observations).text().not_null())
                    .col(
                        ColumnDef::new(Extrusions::Next)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Extrusions::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Extrusions::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_extrusions_work_order")
                            .from(Extrusions::Table, Extrusions::WorkOrderId)
                            .to(WorkOrders::Table, WorkOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_extrusions_machine")
                            .from(Extrusions::Table, Extrusions::MachineId)
                            .to(Machines::Table, Machines::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExtrusionRawMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExtrusionRawMaterials::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExtrusionRawMaterials::ExtrusionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExtrusionRawMaterials::RawMaterialId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExtrusionRawMaterials::Quantity)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExtrusionRawMaterials::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExtrusionRawMaterials::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_extrusion_raw_materials_extrusion")
                            .from(
                                ExtrusionRawMaterials::Table,
                                ExtrusionRawMaterials::ExtrusionId,
                            )
                            .to(Extrusions::Table, Extrusions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_extrusion_raw_materials_raw_material")
                            .from(
                                ExtrusionRawMaterials::Table,
                                ExtrusionRawMaterials::RawMaterialId,
                            )
                            .to(RawMaterials::Table, RawMaterials::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Printings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Printings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Printings::WorkOrderId).integer().not_null())
                    .col(ColumnDef::new(Printings::MachineId).integer().not_null())
                    .col(ColumnDef::new(Printings::IsNew).boolean().not_null())
                    .col(ColumnDef::new(Printings::Observations).text().not_null())
                    .col(
                        ColumnDef::new(Printings::Next)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Printings::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Printings::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_printings_work_order")
                            .from(Printings::Table, Printings::WorkOrderId)
                            .to(WorkOrders::Table, WorkOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_printings_machine")
                            .from(Printings::Table, Printings::MachineId)
                            .to(Machines::Table, Machines::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sealings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sealings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sealings::WorkOrderId).integer().not_null())
                    .col(ColumnDef::new(Sealings::MachineId).integer().not_null())
                    .col(ColumnDef::new(Sealings::Caliber).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Sealings::Hits).integer().not_null())
                    .col(ColumnDef::new(Sealings::PackageUnits).integer().not_null())
                    .col(ColumnDef::new(Sealings::BundleUnits).integer().not_null())
                    .col(ColumnDef::new(Sealings::Observations).text().not_null())
                    .col(
                        ColumnDef::new(Sealings::Next)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Sealings::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Sealings::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sealings_work_order")
                            .from(Sealings::Table, Sealings::WorkOrderId)
                            .to(WorkOrders::Table, WorkOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sealings_machine")
                            .from(Sealings::Table, Sealings::MachineId)
                            .to(Machines::Table, Machines::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Handicrafts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Handicrafts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Handicrafts::WorkOrderId).integer().not_null())
                    .col(ColumnDef::new(Handicrafts::MachineId).integer().not_null())
                    .col(ColumnDef::new(Handicrafts::Observations).text().not_null())
                    .col(
                        ColumnDef::new(Handicrafts::Next)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Handicrafts::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Handicrafts::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_handicrafts_work_order")
                            .from(Handicrafts::Table, Handicrafts::WorkOrderId)
                            .to(WorkOrders::Table, WorkOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_handicrafts_machine")
                            .from(Handicrafts::Table, Handicrafts::MachineId)
                            .to(Machines::Table, Machines::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Touches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Touches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Touches::WorkOrderId).integer().not_null())
                    .col(
                        ColumnDef::new(Touches::Area)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Touches::TotalFinishedWeight)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Touches::TotalFinishedUnits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Touches::TotalWasteWeight)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Touches::TheoricalQuantity).integer().not_null())
                    .col(ColumnDef::new(Touches::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Touches::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_touches_work_order")
                            .from(Touches::Table, Touches::WorkOrderId)
                            .to(WorkOrders::Table, WorkOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TouchDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TouchDetails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TouchDetails::TouchId).integer().not_null())
                    .col(ColumnDef::new(TouchDetails::EmployeeId).integer().not_null())
                    .col(
                        ColumnDef::new(TouchDetails::FinishedWeight)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TouchDetails::FinishedUnits).integer().null())
                    .col(
                        ColumnDef::new(TouchDetails::WasteWeight)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TouchDetails::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(TouchDetails::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_touch_details_touch")
                            .from(TouchDetails::Table, TouchDetails::TouchId)
                            .to(Touches::Table, Touches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_touch_details_employee")
                            .from(TouchDetails::Table, TouchDetails::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            "touch_details",
            "touches",
            "handicrafts",
            "sealings",
            "printings",
            "extrusion_raw_materials",
            "extrusions",
            "work_orders",
            "machines",
            "raw_materials",
            "suppliers",
        ] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Suppliers {
    Table,
    Id,
    CompanyName,
    Email,
    PhoneNumber,
    Contact,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RawMaterials {
    Table,
    Id,
    Name,
    Quantity,
    RawMaterialType,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Machines {
    Table,
    Id,
    Name,
    Area,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WorkOrders {
    Table,
    Id,
    PoDetailId,
    ProductionObservations,
    SurplusPercentage,
    UnitWeight,
    SurplusWeight,
    WoWeight,
    Status,
    TerminationReason,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Extrusions {
    Table,
    Id,
    WorkOrderId,
    MachineId,
    RollType,
    RollsQuantity,
    Caliber,
    Observations,
    Next,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ExtrusionRawMaterials {
    Table,
    Id,
    ExtrusionId,
    RawMaterialId,
    Quantity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Printings {
    Table,
    Id,
    WorkOrderId,
    MachineId,
    IsNew,
    Observations,
    Next,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sealings {
    Table,
    Id,
    WorkOrderId,
    MachineId,
    Caliber,
    Hits,
    PackageUnits,
    BundleUnits,
    Observations,
    Next,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Handicrafts {
    Table,
    Id,
    WorkOrderId,
    MachineId,
    Observations,
    Next,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Touches {
    Table,
    Id,
    WorkOrderId,
    Area,
    TotalFinishedWeight,
    TotalFinishedUnits,
    TotalWasteWeight,
    TheoricalQuantity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TouchDetails {
    Table,
    Id,
    TouchId,
    EmployeeId,
    FinishedWeight,
    FinishedUnits,
    WasteWeight,
    CreatedAt,
    UpdatedAt,
}
