use thiserror::Error;

use crate::domain::{Category, TransactionType};

/// Error type that captures persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Raised when a record fails its creation-time checks. Records are never
/// re-validated on read, so construction is the only gate into the core.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("category {category:?} cannot be used on a {kind:?} transaction")]
    CategoryMismatch {
        kind: TransactionType,
        category: Category,
    },
    #[error("transaction date cannot be in the future")]
    FutureDate,
    #[error("expense limits require an expense category, got {0:?}")]
    NotAnExpenseCategory(Category),
}
