//! Storage-backed CRUD facade over the reminder collection.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::Reminder;
use crate::errors::StoreError;
use crate::storage::StorageBackend;

const COLLECTION: &str = "reminders";

pub struct ReminderService<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> ReminderService<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Loads every stored reminder, degrading to an empty collection on
    /// read or decode failures.
    pub fn get_all(&self) -> Vec<Reminder> {
        match self.load() {
            Ok(reminders) => reminders,
            Err(err) => {
                warn!("failed to load reminders, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// All reminders ordered by ascending due date, the listing order of
    /// the reminders screen.
    pub fn sorted_by_due_date(&self) -> Vec<Reminder> {
        let mut reminders = self.get_all();
        reminders.sort_by_key(|reminder| reminder.due_date);
        reminders
    }

    /// Appends one reminder. Write failures surface to the caller.
    pub fn add(&self, reminder: Reminder) -> Result<(), StoreError> {
        let mut reminders = self.get_all();
        reminders.push(reminder);
        self.persist(&reminders)
    }

    /// Applies `mutate` to the reminder matching `id` and persists the
    /// collection. A missing id is a silent no-op.
    pub fn update<F>(&self, id: Uuid, mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Reminder),
    {
        let mut reminders = self.get_all();
        if let Some(reminder) = reminders.iter_mut().find(|rem| rem.id == id) {
            mutate(reminder);
            self.persist(&reminders)?;
        }
        Ok(())
    }

    /// Flips the completion flag; completed reminders drop out of all
    /// warning evaluation.
    pub fn set_completed(&self, id: Uuid, completed: bool) -> Result<(), StoreError> {
        self.update(id, |reminder| reminder.is_completed = completed)
    }

    /// Records (or clears) the platform notification handle for `id`.
    pub fn attach_notification(
        &self,
        id: Uuid,
        notification_id: Option<String>,
    ) -> Result<(), StoreError> {
        self.update(id, |reminder| reminder.notification_id = notification_id)
    }

    /// Removes the reminder matching `id`; an absent id leaves the
    /// collection as it was.
    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut reminders = self.get_all();
        reminders.retain(|reminder| reminder.id != id);
        self.persist(&reminders)
    }

    fn load(&self) -> Result<Vec<Reminder>, StoreError> {
        match self.backend.read(COLLECTION)? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, reminders: &[Reminder]) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(reminders)?;
        self.backend.write(COLLECTION, &payload)?;
        debug!("persisted {} reminders", reminders.len());
        Ok(())
    }
}
