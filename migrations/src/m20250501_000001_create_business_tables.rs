use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Customers::Nit)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Customers::CompanyName).string().not_null())
                    .col(ColumnDef::new(Customers::Contact).string().null())
                    .col(ColumnDef::new(Customers::ContactEmail).string().null())
                    .col(ColumnDef::new(Customers::ContactPhoneNumber).string().null())
                    .col(ColumnDef::new(Customers::Location).string().not_null())
                    .col(
                        ColumnDef::new(Customers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Customers::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Customers::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Positions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Positions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Positions::Name).string().not_null())
                    .col(ColumnDef::new(Positions::Description).text().null())
                    .col(
                        ColumnDef::new(Positions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Positions::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Positions::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::FirstName).string().not_null())
                    .col(ColumnDef::new(Employees::LastName).string().not_null())
                    .col(ColumnDef::new(Employees::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Employees::Email).string().null().unique_key())
                    .col(ColumnDef::new(Employees::Entity).string().not_null())
                    .col(ColumnDef::new(Employees::PositionId).integer().not_null())
                    .col(
                        ColumnDef::new(Employees::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Employees::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Employees::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_position")
                            .from(Employees::Table, Employees::PositionId)
                            .to(Positions::Table, Positions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductTypes::Name).string().not_null())
                    .col(ColumnDef::new(ProductTypes::Description).text().null())
                    .col(
                        ColumnDef::new(ProductTypes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(ProductTypes::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(ProductTypes::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Materials::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Materials::Name).string().not_null())
                    .col(ColumnDef::new(Materials::Description).text().null())
                    .col(
                        ColumnDef::new(Materials::WeightConstant)
                            .decimal_len(8, 6)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Materials::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Materials::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Materials::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Name).string().not_null())
                    .col(ColumnDef::new(Products::Description).text().null())
                    .col(ColumnDef::new(Products::ProductTypeId).integer().not_null())
                    .col(ColumnDef::new(Products::MaterialId).integer().not_null())
                    .col(ColumnDef::new(Products::ImageUrl).string().not_null())
                    .col(
                        ColumnDef::new(Products::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Products::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Products::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_product_type")
                            .from(Products::Table, Products::ProductTypeId)
                            .to(ProductTypes::Table, ProductTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_material")
                            .from(Products::Table, Products::MaterialId)
                            .to(Materials::Table, Materials::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(References::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(References::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(References::CustomerId).integer().not_null())
                    .col(ColumnDef::new(References::Reference).text().not_null())
                    .col(ColumnDef::new(References::ProductTypeId).integer().not_null())
                    .col(ColumnDef::new(References::MaterialId).integer().not_null())
                    .col(ColumnDef::new(References::Width).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(References::Length).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(References::MeasureUnit)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(References::Caliber).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(References::FilmColor).string().not_null())
                    .col(ColumnDef::new(References::Additive).json().null())
                    .col(
                        ColumnDef::new(References::SealingType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(References::FlapType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(References::FlapSize).decimal_len(10, 2).null())
                    .col(
                        ColumnDef::new(References::GussetsType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(References::FirstGusset).decimal_len(10, 2).null())
                    .col(ColumnDef::new(References::SecondGusset).decimal_len(10, 2).null())
                    .col(
                        ColumnDef::new(References::Tape)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(References::DieCutType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(References::RollerSize)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(References::DynasTreatyFaces)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(References::PantonesQuantity)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(References::PantonesCodes).json().null())
                    .col(ColumnDef::new(References::SketchUrl).string().not_null())
                    .col(
                        ColumnDef::new(References::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(References::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(References::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_references_customer")
                            .from(References::Table, References::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_references_product_type")
                            .from(References::Table, References::ProductTypeId)
                            .to(ProductTypes::Table, ProductTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_references_material")
                            .from(References::Table, References::MaterialId)
                            .to(Materials::Table, Materials::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PurchaseOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PurchaseOrders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PurchaseOrders::OrderDate).date().not_null())
                    .col(ColumnDef::new(PurchaseOrders::CustomerId).integer().not_null())
                    .col(ColumnDef::new(PurchaseOrders::OrderNumber).string().not_null())
                    .col(ColumnDef::new(PurchaseOrders::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(PurchaseOrders::Observations).text().null())
                    .col(
                        ColumnDef::new(PurchaseOrders::Subtotal)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PurchaseOrders::HasIva)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(PurchaseOrders::Iva).decimal_len(10, 2).null())
                    .col(ColumnDef::new(PurchaseOrders::Total).decimal_len(10, 2).null())
                    .col(ColumnDef::new(PurchaseOrders::DeliveryDate).date().not_null())
                    .col(
                        ColumnDef::new(PurchaseOrders::WasAnnulled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(PurchaseOrders::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(PurchaseOrders::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_orders_customer")
                            .from(PurchaseOrders::Table, PurchaseOrders::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_orders_employee")
                            .from(PurchaseOrders::Table, PurchaseOrders::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Payments::PurchaseOrderId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Payments::PaymentMethod).string().not_null())
                    .col(ColumnDef::new(Payments::PaymentTerm).integer().null())
                    .col(ColumnDef::new(Payments::Advance).decimal_len(10, 2).null())
                    .col(ColumnDef::new(Payments::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Payments::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_purchase_order")
                            .from(Payments::Table, Payments::PurchaseOrderId)
                            .to(PurchaseOrders::Table, PurchaseOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PoDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PoDetails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PoDetails::PurchaseOrderId).integer().not_null())
                    .col(ColumnDef::new(PoDetails::ReferenceId).integer().not_null())
                    .col(ColumnDef::new(PoDetails::ReferenceInternal).string().not_null())
                    .col(ColumnDef::new(PoDetails::ProductTypeId).integer().not_null())
                    .col(ColumnDef::new(PoDetails::MaterialId).integer().not_null())
                    .col(ColumnDef::new(PoDetails::Width).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(PoDetails::Length).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(PoDetails::MeasureUnit)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PoDetails::Caliber).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(PoDetails::FilmColor).string().not_null())
                    .col(ColumnDef::new(PoDetails::Kilograms).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(PoDetails::Units).integer().not_null())
                    .col(
                        ColumnDef::new(PoDetails::KilogramPrice)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PoDetails::UnitPrice).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(PoDetails::Additive).json().null())
                    .col(
                        ColumnDef::new(PoDetails::SealingType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PoDetails::FlapType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PoDetails::FlapSize).decimal_len(10, 2).null())
                    .col(
                        ColumnDef::new(PoDetails::GussetsType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PoDetails::FirstGusset).decimal_len(10, 2).null())
                    .col(ColumnDef::new(PoDetails::SecondGusset).decimal_len(10, 2).null())
                    .col(
                        ColumnDef::new(PoDetails::Tape)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PoDetails::DieCutType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PoDetails::RollerSize).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(PoDetails::DynasTreatyFaces)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PoDetails::PantonesQuantity)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PoDetails::PantonesCodes).json().null())
                    .col(ColumnDef::new(PoDetails::ProductionObservations).text().null())
                    .col(ColumnDef::new(PoDetails::DeliveryLocation).string().not_null())
                    .col(
                        ColumnDef::new(PoDetails::IsNewSketch)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(PoDetails::SketchUrl).string().not_null())
                    .col(
                        ColumnDef::new(PoDetails::WasAnnulled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(PoDetails::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(PoDetails::UpdatedAt).timestamp().not_null())
                    .col(
                        ColumnDef::new(PoDetails::WoNumber)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_po_details_purchase_order")
                            .from(PoDetails::Table, PoDetails::PurchaseOrderId)
                            .to(PurchaseOrders::Table, PurchaseOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_po_details_reference")
                            .from(PoDetails::Table, PoDetails::ReferenceId)
                            .to(References::Table, References::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_po_details_product_type")
                            .from(PoDetails::Table, PoDetails::ProductTypeId)
                            .to(ProductTypes::Table, ProductTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_po_details_material")
                            .from(PoDetails::Table, PoDetails::MaterialId)
                            .to(Materials::Table, Materials::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PoChangeLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PoChangeLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PoChangeLogs::ModelName).string().not_null())
                    .col(ColumnDef::new(PoChangeLogs::RecordId).integer().not_null())
                    .col(ColumnDef::new(PoChangeLogs::FieldName).string().not_null())
                    .col(ColumnDef::new(PoChangeLogs::OldValue).text().null())
                    .col(ColumnDef::new(PoChangeLogs::NewValue).text().null())
                    .col(ColumnDef::new(PoChangeLogs::ChangeDate).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_po_change_logs_model_record")
                    .table(PoChangeLogs::Table)
                    .col(PoChangeLogs::ModelName)
                    .col(PoChangeLogs::RecordId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            "po_change_logs",
            "po_details",
            "payments",
            "purchase_orders",
            "references",
            "products",
            "materials",
            "product_types",
            "employees",
            "positions",
            "customers",
        ] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Customers {
    Table,
    Id,
    Nit,
    CompanyName,
    Contact,
    ContactEmail,
    ContactPhoneNumber,
    Location,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Positions {
    Table,
    Id,
    Name,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Entity,
    PositionId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum ProductTypes {
    Table,
    Id,
    Name,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Materials {
    Table,
    Id,
    Name,
    Description,
    WeightConstant,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    Name,
    Description,
    ProductTypeId,
    MaterialId,
    ImageUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum References {
    Table,
    Id,
    CustomerId,
    Reference,
    ProductTypeId,
    MaterialId,
    Width,
    Length,
    MeasureUnit,
    Caliber,
    FilmColor,
    Additive,
    SealingType,
    FlapType,
    FlapSize,
    GussetsType,
    FirstGusset,
    SecondGusset,
    Tape,
    DieCutType,
    RollerSize,
    DynasTreatyFaces,
    PantonesQuantity,
    PantonesCodes,
    SketchUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum PurchaseOrders {
    Table,
    Id,
    OrderDate,
    CustomerId,
    OrderNumber,
    EmployeeId,
    Observations,
    Subtotal,
    HasIva,
    Iva,
    Total,
    DeliveryDate,
    WasAnnulled,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Payments {
    Table,
    Id,
    PurchaseOrderId,
    PaymentMethod,
    PaymentTerm,
    Advance,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum PoDetails {
    Table,
    Id,
    PurchaseOrderId,
    ReferenceId,
    ReferenceInternal,
    ProductTypeId,
    MaterialId,
    Width,
    Length,
    MeasureUnit,
    Caliber,
    FilmColor,
    Kilograms,
    Units,
    KilogramPrice,
    UnitPrice,
    Additive,
    SealingType,
    FlapType,
    FlapSize,
    GussetsType,
    FirstGusset,
    SecondGusset,
    Tape,
    DieCutType,
    RollerSize,
    DynasTreatyFaces,
    PantonesQuantity,
    PantonesCodes,
    ProductionObservations,
    DeliveryLocation,
    IsNewSketch,
    SketchUrl,
    WasAnnulled,
    CreatedAt,
    UpdatedAt,
    WoNumber,
}

#[derive(DeriveIden)]
pub enum PoChangeLogs {
    Table,
    Id,
    ModelName,
    RecordId,
    FieldName,
    OldValue,
    NewValue,
    ChangeDate,
}
