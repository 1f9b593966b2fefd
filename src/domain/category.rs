//! The closed set of transaction categories.

use serde::{Deserialize, Serialize};

/// Categorises ledger activity for budgeting and reporting.
///
/// The set is fixed: four income categories and eight expense categories.
/// `Investment` is dual-purpose — it is the one category used to record
/// savings/investment contributions, always as an income transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Salary,
    Bonus,
    Investment,
    OtherIncome,
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Healthcare,
    Education,
    OtherExpense,
}

/// Grouping used to pair categories with transaction types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryKind {
    Income,
    Expense,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Salary,
        Category::Bonus,
        Category::Investment,
        Category::OtherIncome,
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Healthcare,
        Category::Education,
        Category::OtherExpense,
    ];

    /// Exhaustive category-to-group mapping; every variant is classified.
    pub fn kind(self) -> CategoryKind {
        match self {
            Category::Salary | Category::Bonus | Category::Investment | Category::OtherIncome => {
                CategoryKind::Income
            }
            Category::Food
            | Category::Transport
            | Category::Shopping
            | Category::Entertainment
            | Category::Bills
            | Category::Healthcare
            | Category::Education
            | Category::OtherExpense => CategoryKind::Expense,
        }
    }

    /// Human-readable label used in summaries and warning messages.
    pub fn label(self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Bonus => "Bonus",
            Category::Investment => "Investment",
            Category::OtherIncome => "Other income",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::OtherExpense => "Other expenses",
        }
    }

    /// All categories belonging to `kind`, in declaration order.
    pub fn of_kind(kind: CategoryKind) -> Vec<Category> {
        Self::ALL
            .iter()
            .copied()
            .filter(|category| category.kind() == kind)
            .collect()
    }
}
