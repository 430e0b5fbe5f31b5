//! The module contains the error the engine can throw.
//!
//! The errors fall in three families:
//!
//! - validation errors ([`InvalidAmount`], [`InvalidCategory`],
//!   [`InvalidDescription`], [`InvalidSort`]) thrown when input breaks an
//!   expense invariant or names an unknown sort parameter;
//! - [`KeyNotFound`] thrown when an expense id does not exist;
//! - [`Database`] for storage faults.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidCategory`]: EngineError::InvalidCategory
//!  [`InvalidDescription`]: EngineError::InvalidDescription
//!  [`InvalidSort`]: EngineError::InvalidSort
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error("Invalid description: {0}")]
    InvalidDescription(String),
    #[error("Invalid sort: {0}")]
    InvalidSort(String),
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// Returns `true` for errors caused by caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InvalidCategory(_)
                | Self::InvalidDescription(_)
                | Self::InvalidSort(_)
        )
    }

    pub(crate) fn expense_not_found(id: i32) -> Self {
        Self::KeyNotFound(format!("expense with id {id}"))
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            (Self::InvalidDescription(a), Self::InvalidDescription(b)) => a == b,
            (Self::InvalidSort(a), Self::InvalidSort(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
