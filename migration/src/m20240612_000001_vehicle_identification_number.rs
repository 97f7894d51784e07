use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleIdentificationNumber::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleIdentificationNumber::Id))
                    .col(string_len_uniq(VehicleIdentificationNumber::Vin, 100))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(VehicleIdentificationNumber::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VehicleIdentificationNumber {
    Table,
    Id,
    Vin,
}
