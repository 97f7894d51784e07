//! Database error classification.
//!
//! Uniqueness and foreign key violations are the only store errors the services translate
//! into domain errors; these helpers hide the backend-specific error codes behind
//! SeaORM's [`SqlErr`] classification.

use sea_orm::{DbErr, SqlErr};

/// Returns true when `err` was caused by a unique constraint or unique index violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Returns true when `err` was caused by a foreign key constraint violation.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
