use crate::shared::entity::{Entity, ID};
use chrono::Duration;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// How long before a `CalendarEvent` starts that its reminder
/// should be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderLead {
    Hours24,
    Hours1,
}

impl ReminderLead {
    pub fn offset_millis(&self) -> i64 {
        match self {
            Self::Hours24 => Duration::hours(24).num_milliseconds(),
            Self::Hours1 => Duration::hours(1).num_milliseconds(),
        }
    }

    /// Human readable version used in reminder bodies
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hours24 => "24 hours",
            Self::Hours1 => "1 hour",
        }
    }
}

/// What a `ScheduledNotification` is about. The variant decides which
/// entity `reference_id` points at and how the push payload is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    EventReminder(ReminderLead),
    TournamentTravel,
    Announcement,
}

impl NotificationKind {
    /// Both event reminder kinds, mainly useful for cancellation queries
    pub fn event_reminders() -> Vec<NotificationKind> {
        vec![
            Self::EventReminder(ReminderLead::Hours24),
            Self::EventReminder(ReminderLead::Hours1),
        ]
    }
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Self::EventReminder(ReminderLead::Hours24) => "event_reminder_24h",
            Self::EventReminder(ReminderLead::Hours1) => "event_reminder_1h",
            Self::TournamentTravel => "tournament_travel",
            Self::Announcement => "announcement",
        };
        write!(f, "{}", repr)
    }
}

#[derive(Error, Debug)]
#[error("Invalid notification kind: {0}")]
pub struct InvalidNotificationKindError(pub String);

impl FromStr for NotificationKind {
    type Err = InvalidNotificationKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event_reminder_24h" => Ok(Self::EventReminder(ReminderLead::Hours24)),
            "event_reminder_1h" => Ok(Self::EventReminder(ReminderLead::Hours1)),
            "tournament_travel" => Ok(Self::TournamentTravel),
            "announcement" => Ok(Self::Announcement),
            _ => Err(InvalidNotificationKindError(s.to_string())),
        }
    }
}

/// Lifecycle of a `ScheduledNotification`. A row starts out as `Pending`,
/// is moved to `InProgress` when a worker claims it and ends up as `Sent`.
/// Delivery failures move the row back to `Pending` so that a later worker
/// run picks it up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Pending,
    InProgress,
    Sent,
}

impl Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Sent => "sent",
        };
        write!(f, "{}", repr)
    }
}

#[derive(Error, Debug)]
#[error("Invalid notification status: {0}")]
pub struct InvalidNotificationStatusError(pub String);

impl FromStr for NotificationStatus {
    type Err = InvalidNotificationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "sent" => Ok(Self::Sent),
            _ => Err(InvalidNotificationStatusError(s.to_string())),
        }
    }
}

/// A push notification that should be delivered at `scheduled_for`.
/// Rows are produced when events, tournaments and announcements are
/// created and are drained by the cron triggered worker.
#[derive(Debug, Clone)]
pub struct ScheduledNotification {
    pub id: ID,
    pub kind: NotificationKind,
    /// The `CalendarEvent`, `Tournament` or `Announcement` this
    /// notification is about, depending on `kind`
    pub reference_id: ID,
    /// The timestamp in millis at which this notification becomes due
    pub scheduled_for: i64,
    pub status: NotificationStatus,
    /// Set when the row reaches the `Sent` status
    pub sent_at: Option<i64>,
}

impl ScheduledNotification {
    pub fn new(kind: NotificationKind, reference_id: ID, scheduled_for: i64) -> Self {
        Self {
            id: Default::default(),
            kind,
            reference_id,
            scheduled_for,
            status: NotificationStatus::Pending,
            sent_at: None,
        }
    }

    pub fn sent(&self) -> bool {
        self.status == NotificationStatus::Sent
    }
}

impl Entity for ScheduledNotification {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The rendered content of a push message, ready to be handed to the
/// push gateway
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    pub data: HashMap<String, String>,
}
