use crate::notification::{NotificationPayload, ReminderLead};
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Game,
    Practice,
    Tournament,
    Other,
}

impl EventType {
    /// Label used in reminder titles, e.g. "Game Reminder"
    pub fn label(&self) -> &'static str {
        match self {
            Self::Game => "Game",
            Self::Practice => "Practice",
            Self::Tournament => "Tournament",
            Self::Other => "Event",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Self::Game => "game",
            Self::Practice => "practice",
            Self::Tournament => "tournament",
            Self::Other => "other",
        };
        write!(f, "{}", repr)
    }
}

#[derive(Error, Debug)]
#[error("Invalid event type: {0}")]
pub struct InvalidEventTypeError(pub String);

impl FromStr for EventType {
    type Err = InvalidEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "game" => Ok(Self::Game),
            "practice" => Ok(Self::Practice),
            "tournament" => Ok(Self::Tournament),
            "other" => Ok(Self::Other),
            _ => Err(InvalidEventTypeError(s.to_string())),
        }
    }
}

/// An entry in the team calendar. Games, practices and tournament days
/// all end up here and get push reminders scheduled for them.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: ID,
    pub title: String,
    pub event_type: EventType,
    /// Start timestamp in millis
    pub start_ts: i64,
    /// Duration in millis
    pub duration: i64,
    pub location: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl Entity for CalendarEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl CalendarEvent {
    pub fn reminder_payload(&self, lead: ReminderLead) -> NotificationPayload {
        let mut body = format!("{} starts in {}", self.title, lead.label());
        if let Some(location) = &self.location {
            body = format!("{} at {}", body, location);
        }

        let mut data = HashMap::new();
        data.insert("type".to_string(), "event_reminder".to_string());
        data.insert("eventId".to_string(), self.id.as_string());
        data.insert("eventType".to_string(), self.event_type.to_string());

        NotificationPayload {
            title: format!("{} Reminder", self.event_type.label()),
            body,
            data,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn event(event_type: EventType, location: Option<String>) -> CalendarEvent {
        CalendarEvent {
            id: Default::default(),
            title: "vs Tigers".into(),
            event_type,
            start_ts: 0,
            duration: 1000 * 60 * 60 * 2,
            location,
            created: 0,
            updated: 0,
        }
    }

    #[test]
    fn reminder_payload_with_location() {
        let e = event(EventType::Game, Some("Field 3".into()));
        let payload = e.reminder_payload(ReminderLead::Hours24);
        assert_eq!(payload.title, "Game Reminder");
        assert_eq!(payload.body, "vs Tigers starts in 24 hours at Field 3");
        assert_eq!(payload.data.get("type").unwrap(), "event_reminder");
        assert_eq!(payload.data.get("eventId").unwrap(), &e.id.as_string());
        assert_eq!(payload.data.get("eventType").unwrap(), "game");
    }

    #[test]
    fn reminder_payload_without_location() {
        let e = event(EventType::Practice, None);
        let payload = e.reminder_payload(ReminderLead::Hours1);
        assert_eq!(payload.title, "Practice Reminder");
        assert_eq!(payload.body, "vs Tigers starts in 1 hour");
    }

    #[test]
    fn other_events_are_labeled_as_plain_events() {
        let e = event(EventType::Other, None);
        let payload = e.reminder_payload(ReminderLead::Hours24);
        assert_eq!(payload.title, "Event Reminder");
    }

    #[test]
    fn it_parses_event_types() {
        for event_type in [
            EventType::Game,
            EventType::Practice,
            EventType::Tournament,
            EventType::Other,
        ]
        .iter()
        {
            let parsed = event_type
                .to_string()
                .parse::<EventType>()
                .expect("To parse event type");
            assert_eq!(parsed, *event_type);
        }
        assert!("scrimmage".parse::<EventType>().is_err());
    }
}
