//! Data access layer repositories.
//!
//! One repository per table. Each method issues a single parameterized statement and
//! returns the raw [`sea_orm::DbErr`] on failure; translating constraint violations into
//! domain errors is left to the service layer. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so they work against the pool or inside a transaction.

pub mod owner;
pub mod registration;
pub mod vin;
