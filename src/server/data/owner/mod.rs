#[cfg(test)]
mod tests;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{model::registration::OwnerRequest, server::model::db::OwnerModel};

pub struct OwnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerRepository<'a, C> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<OwnerModel>, DbErr> {
        entity::prelude::TrailerOwner::find()
            .filter(entity::trailer_owner::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Inserts a new owner and returns the stored row.
    ///
    /// Fails with a unique constraint violation if an owner with the same email exists.
    pub async fn create(&self, owner: OwnerRequest) -> Result<OwnerModel, DbErr> {
        let owner = entity::trailer_owner::ActiveModel {
            email: ActiveValue::Set(owner.email),
            first_name: ActiveValue::Set(owner.first_name),
            last_name: ActiveValue::Set(owner.last_name),
            address: ActiveValue::Set(owner.address),
            city: ActiveValue::Set(owner.city),
            state: ActiveValue::Set(owner.state),
            country: ActiveValue::Set(owner.country),
            mobile_phone: ActiveValue::Set(owner.mobile_phone),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        owner.insert(self.db).await
    }
}
