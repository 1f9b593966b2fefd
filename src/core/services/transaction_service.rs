//! Storage-backed CRUD facade over the transaction collection.

use chrono::NaiveDateTime;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::aggregate::{filter_by_date_range, month_bounds};
use crate::domain::Transaction;
use crate::errors::StoreError;
use crate::storage::StorageBackend;

const COLLECTION: &str = "transactions";

pub struct TransactionService<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> TransactionService<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Loads every stored transaction.
    ///
    /// Unreadable or undecodable data degrades to an empty collection
    /// with a logged warning; downstream computations simply see zero
    /// records rather than an error.
    pub fn get_all(&self) -> Vec<Transaction> {
        match self.load() {
            Ok(transactions) => transactions,
            Err(err) => {
                warn!("failed to load transactions, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Appends one transaction. Write failures surface to the caller.
    pub fn add(&self, transaction: Transaction) -> Result<(), StoreError> {
        let mut transactions = self.get_all();
        transactions.push(transaction);
        self.persist(&transactions)
    }

    /// Applies `mutate` to the transaction matching `id` and persists the
    /// collection. A missing id is a silent no-op.
    pub fn update<F>(&self, id: Uuid, mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Transaction),
    {
        let mut transactions = self.get_all();
        if let Some(transaction) = transactions.iter_mut().find(|txn| txn.id == id) {
            mutate(transaction);
            self.persist(&transactions)?;
        }
        Ok(())
    }

    /// Removes the transaction matching `id`; an absent id leaves the
    /// collection as it was.
    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut transactions = self.get_all();
        transactions.retain(|txn| txn.id != id);
        self.persist(&transactions)
    }

    /// Transactions whose effective date falls within `[start, end]`.
    pub fn get_by_date_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<Transaction> {
        filter_by_date_range(&self.get_all(), start, end)
    }

    /// Transactions of the calendar month containing `now`.
    pub fn current_month(&self, now: NaiveDateTime) -> Vec<Transaction> {
        let (start, end) = month_bounds(now);
        self.get_by_date_range(start, end)
    }

    fn load(&self) -> Result<Vec<Transaction>, StoreError> {
        match self.backend.read(COLLECTION)? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(transactions)?;
        self.backend.write(COLLECTION, &payload)?;
        debug!("persisted {} transactions", transactions.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::{Category, TransactionType};
    use crate::storage::MemoryStorage;

    use super::*;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample(amount: f64, day: u32) -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            Category::Food,
            amount,
            "fixture",
            at(day),
            at(31),
        )
        .unwrap()
    }

    #[test]
    fn add_then_get_all_roundtrips() {
        let service = TransactionService::new(MemoryStorage::new());
        assert!(service.get_all().is_empty());
        service.add(sample(45_000.0, 5)).unwrap();
        service.add(sample(80_000.0, 6)).unwrap();
        assert_eq!(service.get_all().len(), 2);
    }

    #[test]
    fn update_mutates_the_matching_record_only() {
        let service = TransactionService::new(MemoryStorage::new());
        let txn = sample(45_000.0, 5);
        let id = txn.id;
        service.add(txn).unwrap();
        service.add(sample(80_000.0, 6)).unwrap();

        service
            .update(id, |txn| txn.description = "Dinner out".into())
            .unwrap();

        let stored = service.get_all();
        assert_eq!(
            stored.iter().find(|txn| txn.id == id).unwrap().description,
            "Dinner out"
        );
        assert_eq!(
            stored
                .iter()
                .filter(|txn| txn.description == "fixture")
                .count(),
            1
        );
    }

    #[test]
    fn update_of_a_missing_id_is_a_silent_noop() {
        let service = TransactionService::new(MemoryStorage::new());
        service.add(sample(45_000.0, 5)).unwrap();
        service
            .update(Uuid::new_v4(), |txn| txn.amount = 1.0)
            .unwrap();
        assert_eq!(service.get_all()[0].amount, 45_000.0);
    }

    #[test]
    fn delete_removes_only_the_matching_record() {
        let service = TransactionService::new(MemoryStorage::new());
        let txn = sample(45_000.0, 5);
        let id = txn.id;
        service.add(txn).unwrap();
        service.add(sample(80_000.0, 6)).unwrap();
        service.delete(id).unwrap();
        let remaining = service.get_all();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|txn| txn.id != id));
    }

    #[test]
    fn corrupt_payloads_fail_open_to_an_empty_collection() {
        let storage = MemoryStorage::new();
        storage.write(COLLECTION, "not json").unwrap();
        let service = TransactionService::new(storage);
        assert!(service.get_all().is_empty());
    }

    #[test]
    fn date_range_query_uses_inclusive_bounds() {
        let service = TransactionService::new(MemoryStorage::new());
        service.add(sample(1.0, 9)).unwrap();
        service.add(sample(2.0, 10)).unwrap();
        service.add(sample(3.0, 20)).unwrap();
        service.add(sample(4.0, 21)).unwrap();
        let hits = service.get_by_date_range(at(10), at(20));
        let amounts: Vec<f64> = hits.iter().map(|txn| txn.amount).collect();
        assert_eq!(amounts, vec![2.0, 3.0]);
    }
}
