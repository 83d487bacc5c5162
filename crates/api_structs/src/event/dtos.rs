use dugout_domain::{CalendarEvent, EventType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDTO {
    pub id: ID,
    pub title: String,
    pub event_type: EventType,
    pub start_ts: i64,
    pub duration: i64,
    pub location: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl CalendarEventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title,
            event_type: event.event_type,
            start_ts: event.start_ts,
            duration: event.duration,
            location: event.location,
            created: event.created,
            updated: event.updated,
        }
    }
}
