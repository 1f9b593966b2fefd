//! Period totals for the home and report screens.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::aggregate::{filter_by_date_range, investment_income, month_bounds, sum_by_type};
use crate::domain::{Transaction, TransactionType};

/// Point-in-time totals for a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub total_savings: f64,
    pub balance: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Totals over the given transactions.
    pub fn totals(transactions: &[Transaction]) -> Summary {
        let total_income = sum_by_type(transactions, TransactionType::Income);
        let total_expense = sum_by_type(transactions, TransactionType::Expense);
        Summary {
            total_income,
            total_expense,
            total_savings: investment_income(transactions),
            balance: total_income - total_expense,
        }
    }

    /// Totals restricted to the calendar month containing `now`.
    pub fn monthly(transactions: &[Transaction], now: NaiveDateTime) -> Summary {
        let (start, end) = month_bounds(now);
        Self::totals(&filter_by_date_range(transactions, start, end))
    }

    /// The newest transactions by effective date, at most `limit` of them.
    pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
        let mut sorted = transactions.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(limit);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::Category;

    use super::*;

    fn at(month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn entry(kind: TransactionType, category: Category, amount: f64, month: u32, day: u32) -> Transaction {
        Transaction::new(kind, category, amount, "fixture", at(month, day), at(8, 31)).unwrap()
    }

    #[test]
    fn totals_balance_income_against_expense() {
        let transactions = vec![
            entry(TransactionType::Income, Category::Salary, 10_000_000.0, 8, 1),
            entry(TransactionType::Income, Category::Investment, 2_000_000.0, 8, 2),
            entry(TransactionType::Expense, Category::Food, 1_500_000.0, 8, 3),
        ];
        let summary = SummaryService::totals(&transactions);
        assert_eq!(summary.total_income, 12_000_000.0);
        assert_eq!(summary.total_expense, 1_500_000.0);
        assert_eq!(summary.total_savings, 2_000_000.0);
        assert_eq!(summary.balance, 10_500_000.0);
    }

    #[test]
    fn monthly_ignores_other_months() {
        let transactions = vec![
            entry(TransactionType::Income, Category::Salary, 10_000_000.0, 7, 31),
            entry(TransactionType::Expense, Category::Food, 1_500_000.0, 8, 3),
        ];
        let summary = SummaryService::monthly(&transactions, at(8, 15));
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expense, 1_500_000.0);
        assert_eq!(summary.balance, -1_500_000.0);
    }

    #[test]
    fn recent_returns_newest_first_and_truncates() {
        let transactions = vec![
            entry(TransactionType::Expense, Category::Food, 1.0, 8, 1),
            entry(TransactionType::Expense, Category::Food, 2.0, 8, 20),
            entry(TransactionType::Expense, Category::Food, 3.0, 8, 10),
        ];
        let recent = SummaryService::recent(&transactions, 2);
        let amounts: Vec<f64> = recent.iter().map(|txn| txn.amount).collect();
        assert_eq!(amounts, vec![2.0, 3.0]);
    }
}
