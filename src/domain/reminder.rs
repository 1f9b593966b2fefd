//! Reminder records: general notes, expense limits, and savings targets.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::{Category, CategoryKind};
use crate::errors::ValidationError;

/// The rule a reminder enforces, one variant per reminder type.
///
/// Each variant carries exactly the fields its type requires, so an expense
/// limit without a category or ceiling cannot be represented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ReminderRule {
    /// A plain note with an optional reference amount; never evaluated.
    #[serde(rename = "GENERAL", rename_all = "camelCase")]
    General {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<f64>,
    },
    /// Monthly spend in `category` should stay below `max_amount`.
    #[serde(rename = "EXPENSE_LIMIT", rename_all = "camelCase")]
    ExpenseLimit { category: Category, max_amount: f64 },
    /// Monthly investment income should reach at least `min_amount`.
    #[serde(rename = "SAVINGS_TARGET", rename_all = "camelCase")]
    SavingsTarget { min_amount: f64 },
}

/// A user-defined alert rule. Completion is the only mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub rule: ReminderRule,
    pub due_date: NaiveDateTime,
    pub is_recurring: bool,
    pub is_completed: bool,
    /// Platform handle of the scheduled notification, if one was delivered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
}

impl Reminder {
    /// Validates and builds a new reminder.
    ///
    /// Titles and descriptions must be non-blank; expense limits must name
    /// an expense category and a positive ceiling; savings targets must
    /// name a positive floor. Invalid reminders are rejected outright,
    /// never partially created.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        rule: ReminderRule,
        due_date: NaiveDateTime,
        is_recurring: bool,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let description = description.into().trim().to_owned();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        match rule {
            ReminderRule::ExpenseLimit {
                category,
                max_amount,
            } => {
                if category.kind() != CategoryKind::Expense {
                    return Err(ValidationError::NotAnExpenseCategory(category));
                }
                if !(max_amount > 0.0) {
                    return Err(ValidationError::NonPositiveAmount);
                }
            }
            ReminderRule::SavingsTarget { min_amount } => {
                if !(min_amount > 0.0) {
                    return Err(ValidationError::NonPositiveAmount);
                }
            }
            ReminderRule::General { .. } => {}
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            rule,
            due_date,
            is_recurring,
            is_completed: false,
            notification_id: None,
        })
    }

    /// The limit configuration when this reminder is an expense limit.
    pub fn expense_limit(&self) -> Option<(Category, f64)> {
        match self.rule {
            ReminderRule::ExpenseLimit {
                category,
                max_amount,
            } => Some((category, max_amount)),
            _ => None,
        }
    }
}
