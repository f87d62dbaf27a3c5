use sea_orm::error::{DbErr, SqlErr};
use serde::Serialize;
use tracing::debug;

/// Errors raised by the schema layer and its repositories.
///
/// Engine errors are classified on conversion: unique-key collisions become
/// [`SchemaError::UniqueViolation`], foreign-key breaches become
/// [`SchemaError::IntegrityViolation`], everything else is carried unchanged in
/// [`SchemaError::Database`].
#[derive(Debug, thiserror::Error, Serialize)]
pub enum SchemaError {
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Integrity constraint violated: {0}")]
    IntegrityViolation(String),

    #[error("Validation failed: {0}")]
    Validation(
        #[serde(skip)]
        validator::ValidationErrors,
    ),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(
        #[serde(skip)]
        DbErr,
    ),

    #[error("Configuration error: {0}")]
    Config(
        #[serde(skip)]
        #[from]
        crate::config::AppConfigError,
    ),
}

impl SchemaError {
    /// Classifies an engine error by the constraint it violated.
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                debug!("unique constraint violation: {}", msg);
                SchemaError::UniqueViolation(msg)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                debug!("foreign key violation: {}", msg);
                SchemaError::IntegrityViolation(msg)
            }
            _ => SchemaError::Database(err),
        }
    }

    pub fn not_found(entity: &str, key: impl std::fmt::Display) -> Self {
        SchemaError::NotFound(format!("{} {} not found", entity, key))
    }

    /// True for both kinds of constraint breach the engine reports.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            SchemaError::UniqueViolation(_) | SchemaError::IntegrityViolation(_)
        )
    }
}

impl From<DbErr> for SchemaError {
    fn from(err: DbErr) -> Self {
        SchemaError::from_db(err)
    }
}

impl From<validator::ValidationErrors> for SchemaError {
    fn from(err: validator::ValidationErrors) -> Self {
        SchemaError::Validation(err)
    }
}

pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_db_errors_pass_through_unchanged() {
        let err = SchemaError::from(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, SchemaError::Database(DbErr::Custom(ref m)) if m == "boom"));
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn not_found_message_names_the_entity() {
        let err = SchemaError::not_found("Order", "ORD-1");
        assert_eq!(err.to_string(), "Not found: Order ORD-1 not found");
    }
}
