//! Transaction records and their creation-time validation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::{Category, CategoryKind};
use crate::errors::ValidationError;

/// Direction of a financial event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// The category group a transaction of this type must draw from.
    pub fn category_kind(self) -> CategoryKind {
        match self {
            TransactionType::Income => CategoryKind::Income,
            TransactionType::Expense => CategoryKind::Expense,
        }
    }
}

/// An immutable record of a financial event.
///
/// `date` is the user-specified effective instant (backdating allowed,
/// future-dating not); `created_at` records when the entry was made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// Validates and builds a new transaction.
    ///
    /// `now` caps the effective `date` and stamps `created_at`. Rejects
    /// non-positive amounts, blank descriptions, and categories that do not
    /// belong to the transaction type's group.
    pub fn new(
        kind: TransactionType,
        category: Category,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        if !(amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount);
        }
        let description = description.into().trim().to_owned();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if category.kind() != kind.category_kind() {
            return Err(ValidationError::CategoryMismatch { kind, category });
        }
        if date > now {
            return Err(ValidationError::FutureDate);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            category,
            amount,
            description,
            date,
            created_at: now,
        })
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}
