//! Reminder evaluation: turns the month's transactions and the active
//! reminders into user-facing warning messages.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::core::aggregate::{days_until_month_end, investment_income, sum_by_type_and_category};
use crate::currency::format_amount;
use crate::domain::{Reminder, ReminderRule, Transaction, TransactionType};

/// Fraction of an expense limit at which near-limit warnings begin.
///
/// The pre-save guard applies the same ratio.
pub const NEAR_LIMIT_RATIO: f64 = 0.8;

/// Days before month end at which savings-target evaluation opens.
pub const SAVINGS_WINDOW_DAYS: i64 = 3;

/// Evaluates every active reminder against the current month's
/// transactions, returning a warning message per triggered reminder.
///
/// Completed reminders never warn, and reminders without a triggered
/// condition are absent from the map. The result is a pure function of the
/// arguments; calling twice with the same input yields the same output.
pub fn evaluate(
    current_month: &[Transaction],
    reminders: &[Reminder],
    now: NaiveDateTime,
) -> HashMap<Uuid, String> {
    let days_left = days_until_month_end(now);
    let mut warnings = HashMap::new();

    for reminder in reminders {
        if reminder.is_completed {
            continue;
        }
        match reminder.rule {
            ReminderRule::ExpenseLimit {
                category,
                max_amount,
            } => {
                let spent =
                    sum_by_type_and_category(current_month, TransactionType::Expense, category);
                if spent > max_amount {
                    warnings.insert(
                        reminder.id,
                        format!(
                            "{} spending has exceeded the {} limit! Current total: {}",
                            category.label(),
                            format_amount(max_amount),
                            format_amount(spent)
                        ),
                    );
                } else if spent >= max_amount * NEAR_LIMIT_RATIO {
                    let percent = (spent / max_amount * 100.0).round() as i64;
                    warnings.insert(
                        reminder.id,
                        format!(
                            "{} spending is approaching its limit ({percent}%)",
                            category.label()
                        ),
                    );
                }
            }
            ReminderRule::SavingsTarget { min_amount } => {
                // The window opens three calendar days before month end and
                // closes with the month.
                if (0..=SAVINGS_WINDOW_DAYS).contains(&days_left) {
                    let savings = investment_income(current_month);
                    if savings < min_amount {
                        let remaining = min_amount - savings;
                        warnings.insert(
                            reminder.id,
                            format!(
                                "{days_left} day(s) left this month! Save another {} to reach your target",
                                format_amount(remaining)
                            ),
                        );
                    }
                }
            }
            ReminderRule::General { .. } => {}
        }
    }

    warnings
}
