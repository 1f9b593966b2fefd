pub mod reminder_service;
pub mod summary_service;
pub mod transaction_service;

pub use reminder_service::ReminderService;
pub use summary_service::{Summary, SummaryService};
pub use transaction_service::TransactionService;
