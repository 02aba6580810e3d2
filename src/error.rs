//! Errors surfaced by the ledger and the service around it.
//!
//! The balance resolvers themselves never fail; only expense validation, the
//! storage layer and settings loading produce a [`LedgerError`].
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("\"{0}\" not found!")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
    #[error(transparent)]
    Settings(#[from] config::ConfigError),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidExpense(a), Self::InvalidExpense(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            (Self::Settings(a), Self::Settings(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
