//! Daily cumulative series for the monthly report chart.

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::aggregate::{investment_income, sum_by_type};
use crate::domain::{Transaction, TransactionType};

/// Per-day series over one calendar month, all in raw currency units.
///
/// Income and expense run cumulatively from zero; savings is the plain
/// per-day investment income. The presentation layer applies any display
/// scaling (the report chart divides by a million).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySeries {
    pub days: Vec<NaiveDate>,
    pub cumulative_income: Vec<f64>,
    pub cumulative_expense: Vec<f64>,
    pub daily_savings: Vec<f64>,
}

/// Builds the daily series for every calendar day in
/// `[month_start, month_end]`, in ascending order.
pub fn build_daily_series(
    month_transactions: &[Transaction],
    month_start: NaiveDateTime,
    month_end: NaiveDateTime,
) -> DailySeries {
    let mut series = DailySeries::default();
    let mut cumulative_income = 0.0;
    let mut cumulative_expense = 0.0;

    let mut day = month_start.date();
    let last = month_end.date();
    while day <= last {
        let day_transactions: Vec<Transaction> = month_transactions
            .iter()
            .filter(|txn| txn.date.date() == day)
            .cloned()
            .collect();

        cumulative_income += sum_by_type(&day_transactions, TransactionType::Income);
        cumulative_expense += sum_by_type(&day_transactions, TransactionType::Expense);

        series.days.push(day);
        series.cumulative_income.push(cumulative_income);
        series.cumulative_expense.push(cumulative_expense);
        series.daily_savings.push(investment_income(&day_transactions));

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    series
}
