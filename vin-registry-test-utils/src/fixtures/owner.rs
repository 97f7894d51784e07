use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, model::OwnerModel, TestContext};

impl TestContext {
    pub fn owner<'a>(&'a mut self) -> OwnerFixtures<'a> {
        OwnerFixtures { setup: self }
    }
}

pub struct OwnerFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> OwnerFixtures<'a> {
    /// Insert an owner with only the email populated.
    pub async fn insert_owner(&self, email: &str) -> Result<OwnerModel, TestError> {
        Ok(
            entity::prelude::TrailerOwner::insert(entity::trailer_owner::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Count owner rows sharing `email`.
    pub async fn count_by_email(&self, email: &str) -> Result<usize, TestError> {
        Ok(entity::prelude::TrailerOwner::find()
            .filter(entity::trailer_owner::Column::Email.eq(email))
            .all(&self.setup.db)
            .await?
            .len())
    }

    /// Count all owner rows.
    pub async fn count(&self) -> Result<usize, TestError> {
        Ok(entity::prelude::TrailerOwner::find()
            .all(&self.setup.db)
            .await?
            .len())
    }
}
