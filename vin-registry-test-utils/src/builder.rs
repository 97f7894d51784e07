//! Declarative test builder.
//!
//! Builder methods only queue work; tables and fixtures are created in order during the
//! final `build()` call.

use chrono::NaiveDate;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_vin_tables: bool,

    vins: Vec<String>,
    owners: Vec<String>,
    registrations: Vec<(String, String, NaiveDate)>, // (vin, owner email, purchase date)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_vin_tables: false,
            vins: Vec::new(),
            owners: Vec::new(),
            registrations: Vec::new(),
        }
    }

    /// Add all service tables to the test database.
    ///
    /// Creates `VehicleIdentificationNumber`, `TrailerOwner` and `WarrantyRegistration`,
    /// in that order so the registration foreign keys resolve.
    pub fn with_vin_tables(mut self) -> Self {
        self.include_vin_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables. Useful for tests that need a table to
    /// be missing in order to provoke a database error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vin_registry_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), vin_registry_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(VehicleIdentificationNumber)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a VIN record during `build()`.
    pub fn with_vin(mut self, vin: &str) -> Self {
        self.vins.push(vin.to_string());
        self
    }

    /// Insert an owner record with only the email set during `build()`.
    pub fn with_owner(mut self, email: &str) -> Self {
        self.owners.push(email.to_string());
        self
    }

    /// Insert a registration linking a VIN and an owner during `build()`.
    ///
    /// Both the VIN and the owner must also be queued with [`Self::with_vin`] and
    /// [`Self::with_owner`].
    pub fn with_registration(mut self, vin: &str, email: &str, purchase_date: NaiveDate) -> Self {
        self.registrations
            .push((vin.to_string(), email.to_string(), purchase_date));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables and fixtures in place
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::Fixture)` - A registration references an unqueued VIN or owner
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_vin_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::VehicleIdentificationNumber),
                schema.create_table_from_entity(entity::prelude::TrailerOwner),
                schema.create_table_from_entity(entity::prelude::WarrantyRegistration),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        let mut vin_models = Vec::new();
        for vin in self.vins {
            vin_models.push(setup.vin().insert_vin(&vin).await?);
        }

        let mut owner_models = Vec::new();
        for email in self.owners {
            owner_models.push(setup.owner().insert_owner(&email).await?);
        }

        for (vin, email, purchase_date) in self.registrations {
            let vin_model = vin_models
                .iter()
                .find(|m| m.vin == vin)
                .ok_or_else(|| TestError::Fixture(format!("VIN {} was not queued", vin)))?;
            let owner_model = owner_models
                .iter()
                .find(|m| m.email == email)
                .ok_or_else(|| TestError::Fixture(format!("owner {} was not queued", email)))?;

            setup
                .registration()
                .insert_registration(vin_model.id, owner_model.id, purchase_date)
                .await?;
        }

        Ok(setup)
    }
}
