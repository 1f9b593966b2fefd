//! Notification dispatch: the core builds requests, the host delivers.
//!
//! Keeping delivery behind [`NotificationSink`] means warning evaluation
//! and reminder CRUD can be tested without any notification backend.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::Reminder;

/// A request to surface a local notification for a reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub reminder_id: Uuid,
    pub title: String,
    pub body: String,
    pub fire_at: NaiveDateTime,
    pub repeats: bool,
}

/// Delivery backend for scheduled notifications, implemented by the host
/// shell (push service, OS notification center, test recorder).
pub trait NotificationSink {
    /// Schedules a notification and returns the platform handle, or
    /// `None` when the user denied notification permissions.
    fn schedule(&self, request: NotificationRequest) -> Option<String>;

    /// Cancels a previously scheduled notification. Fire-and-forget: an
    /// unknown handle is ignored.
    fn cancel(&self, notification_id: &str);
}

/// Builds the notification payload for a reminder: a fixed title, the
/// reminder's own title as body, firing at the due date and repeating
/// when the reminder recurs.
pub fn notification_for(reminder: &Reminder) -> NotificationRequest {
    NotificationRequest {
        reminder_id: reminder.id,
        title: "Payment reminder".to_owned(),
        body: reminder.title.clone(),
        fire_at: reminder.due_date,
        repeats: reminder.is_recurring,
    }
}
