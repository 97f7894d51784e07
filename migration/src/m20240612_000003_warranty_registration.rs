use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20240612_000001_vehicle_identification_number::VehicleIdentificationNumber,
    m20240612_000002_trailer_owner::TrailerOwner,
};

static IDX_WARRANTY_REGISTRATION_VIN_ID: &str = "idx-warranty_registration-vin_id";
static IDX_WARRANTY_REGISTRATION_OWNER_ID: &str = "idx-warranty_registration-owner_id";
static FK_WARRANTY_REGISTRATION_VIN_ID: &str = "fk-warranty_registration-vin_id";
static FK_WARRANTY_REGISTRATION_OWNER_ID: &str = "fk-warranty_registration-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarrantyRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(WarrantyRegistration::Id))
                    .col(integer(WarrantyRegistration::VinId))
                    .col(integer(WarrantyRegistration::OwnerId))
                    .col(date(WarrantyRegistration::PurchaseDate))
                    .col(timestamp(WarrantyRegistration::RegisteredAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WARRANTY_REGISTRATION_VIN_ID)
                    .table(WarrantyRegistration::Table)
                    .col(WarrantyRegistration::VinId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WARRANTY_REGISTRATION_OWNER_ID)
                    .table(WarrantyRegistration::Table)
                    .col(WarrantyRegistration::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WARRANTY_REGISTRATION_VIN_ID)
                    .from_tbl(WarrantyRegistration::Table)
                    .from_col(WarrantyRegistration::VinId)
                    .to_tbl(VehicleIdentificationNumber::Table)
                    .to_col(VehicleIdentificationNumber::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WARRANTY_REGISTRATION_OWNER_ID)
                    .from_tbl(WarrantyRegistration::Table)
                    .from_col(WarrantyRegistration::OwnerId)
                    .to_tbl(TrailerOwner::Table)
                    .to_col(TrailerOwner::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WARRANTY_REGISTRATION_OWNER_ID)
                    .table(WarrantyRegistration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WARRANTY_REGISTRATION_VIN_ID)
                    .table(WarrantyRegistration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WARRANTY_REGISTRATION_OWNER_ID)
                    .table(WarrantyRegistration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WARRANTY_REGISTRATION_VIN_ID)
                    .table(WarrantyRegistration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WarrantyRegistration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WarrantyRegistration {
    Table,
    Id,
    VinId,
    OwnerId,
    PurchaseDate,
    RegisteredAt,
}
