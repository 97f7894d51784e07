use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrailerOwner::Table)
                    .if_not_exists()
                    .col(pk_auto(TrailerOwner::Id))
                    .col(string_uniq(TrailerOwner::Email))
                    .col(string_null(TrailerOwner::FirstName))
                    .col(string_null(TrailerOwner::LastName))
                    .col(string_null(TrailerOwner::Address))
                    .col(string_null(TrailerOwner::City))
                    .col(string_null(TrailerOwner::State))
                    .col(string_null(TrailerOwner::Country))
                    .col(string_null(TrailerOwner::MobilePhone))
                    .col(timestamp(TrailerOwner::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrailerOwner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TrailerOwner {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    Address,
    City,
    State,
    Country,
    MobilePhone,
    CreatedAt,
}
