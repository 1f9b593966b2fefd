//! Pure aggregation over in-memory transaction collections.
//!
//! Nothing here reads the clock; callers supply the instant they care
//! about, which keeps every time-sensitive computation deterministic.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::domain::{Category, Transaction, TransactionType};

/// Sum of `amount` over transactions of the given type.
pub fn sum_by_type(transactions: &[Transaction], kind: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .map(|txn| txn.amount)
        .sum()
}

/// Sum of `amount` over transactions of the given type and category.
pub fn sum_by_type_and_category(
    transactions: &[Transaction],
    kind: TransactionType,
    category: Category,
) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind && txn.category == category)
        .map(|txn| txn.amount)
        .sum()
}

/// Transactions whose effective date falls within `[start, end]`.
///
/// Both bounds are inclusive and the comparison uses the user-facing
/// `date`, never `created_at`.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| txn.date >= start && txn.date <= end)
        .cloned()
        .collect()
}

/// Total savings: income recorded under the investment category.
///
/// This is the canonical definition of "savings" throughout the crate.
pub fn investment_income(transactions: &[Transaction]) -> f64 {
    sum_by_type_and_category(transactions, TransactionType::Income, Category::Investment)
}

/// First and last instant of the calendar month containing `instant`.
pub fn month_bounds(instant: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let date = instant.date();
    let start = date.with_day(1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let last_day = days_in_month(date.year(), date.month());
    let end = date
        .with_day(last_day)
        .unwrap()
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap();
    (start, end)
}

/// Whole days between `now` and the end of its month's final day.
///
/// Zero on the last day of the month; the fraction of a day still to run
/// is truncated.
pub fn days_until_month_end(now: NaiveDateTime) -> i64 {
    let (_, end) = month_bounds(now);
    (end - now).num_days()
}

/// Shifts `instant` by whole calendar months, clamping the day-of-month
/// when the target month is shorter. The time of day is preserved.
pub fn shift_months(instant: NaiveDateTime, months: i32) -> NaiveDateTime {
    let date = instant.date();
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day)
        .unwrap()
        .and_time(instant.time())
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (first_next - Duration::days(1)).day()
}
