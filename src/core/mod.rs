//! The pure budget engine and its storage-backed service facades.

pub mod aggregate;
pub mod guard;
pub mod series;
pub mod services;
pub mod warnings;

pub use guard::{check_before_save, GuardResult};
pub use series::{build_daily_series, DailySeries};
pub use warnings::{evaluate, NEAR_LIMIT_RATIO, SAVINGS_WINDOW_DAYS};
