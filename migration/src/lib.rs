pub use sea_orm_migration::prelude::*;

mod m20240612_000001_vehicle_identification_number;
mod m20240612_000002_trailer_owner;
mod m20240612_000003_warranty_registration;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240612_000001_vehicle_identification_number::Migration),
            Box::new(m20240612_000002_trailer_owner::Migration),
            Box::new(m20240612_000003_warranty_registration::Migration),
        ]
    }
}
