//! Pre-save check for expense transactions against configured limits.

use chrono::NaiveDateTime;

use crate::core::aggregate::{filter_by_date_range, month_bounds, sum_by_type_and_category};
use crate::core::warnings::NEAR_LIMIT_RATIO;
use crate::currency::format_amount;
use crate::domain::{Reminder, Transaction, TransactionType};

/// Outcome of the pre-save check. Advisory only: `Warn` asks the caller to
/// offer a cancel / save-anyway choice, it never blocks persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardResult {
    /// No applicable limit, or the projected total stays comfortably under it.
    Proceed,
    /// Saving would reach or cross a configured limit.
    Warn(String),
}

impl GuardResult {
    pub fn is_warning(&self) -> bool {
        matches!(self, GuardResult::Warn(_))
    }
}

/// Classifies a not-yet-persisted expense against the first matching
/// active expense-limit reminder for its category.
///
/// Income candidates short-circuit to [`GuardResult::Proceed`] before any
/// reminder lookup. When several limits exist for one category (nothing
/// prevents that), the first by collection order wins. The candidate is
/// not yet stored, so its amount is added on top of the month's recorded
/// spend.
pub fn check_before_save(
    candidate: &Transaction,
    transactions: &[Transaction],
    reminders: &[Reminder],
    now: NaiveDateTime,
) -> GuardResult {
    if candidate.kind != TransactionType::Expense {
        return GuardResult::Proceed;
    }
    let Some((category, max_amount)) = reminders
        .iter()
        .filter(|reminder| !reminder.is_completed)
        .find_map(|reminder| {
            reminder
                .expense_limit()
                .filter(|(limit_category, _)| *limit_category == candidate.category)
        })
    else {
        return GuardResult::Proceed;
    };

    let (start, end) = month_bounds(now);
    let month = filter_by_date_range(transactions, start, end);
    let current = sum_by_type_and_category(&month, TransactionType::Expense, category);
    let total_after = current + candidate.amount;

    if total_after > max_amount {
        let over = total_after - max_amount;
        GuardResult::Warn(format!(
            "{} spending will exceed the {} limit!\n\nCurrent: {}\nAfter saving: {}\nOver by: {}",
            category.label(),
            format_amount(max_amount),
            format_amount(current),
            format_amount(total_after),
            format_amount(over)
        ))
    } else if total_after >= max_amount * NEAR_LIMIT_RATIO {
        let percent = (total_after / max_amount * 100.0).round() as i64;
        GuardResult::Warn(format!(
            "{} spending is close to its limit!\n\nCurrent: {}\nAfter saving: {}\nLimit: {}\n\n{percent}% of the limit reached",
            category.label(),
            format_amount(current),
            format_amount(total_after),
            format_amount(max_amount)
        ))
    } else {
        GuardResult::Proceed
    }
}
