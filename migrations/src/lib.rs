pub use sea_orm_migration::prelude::*;

mod m20250501_000001_create_business_tables;
mod m20250501_000002_create_production_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250501_000001_create_business_tables::Migration),
            Box::new(m20250501_000002_create_production_tables::Migration),
        ]
    }
}
