#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the transaction ledger, reminder rules, and
//! budget-warning primitives that power a personal finance tracker.

pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod notify;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
