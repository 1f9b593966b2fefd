//! Domain records: transactions, categories, and reminder rules.

pub mod category;
pub mod reminder;
pub mod transaction;

pub use category::{Category, CategoryKind};
pub use reminder::{Reminder, ReminderRule};
pub use transaction::{Transaction, TransactionType};
