use crate::notification::NotificationPayload;
use crate::shared::entity::{Entity, ID};
use std::collections::HashMap;

/// A travel tournament the team attends. Hotel details are optional and
/// only known once somebody on the staff has booked.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: ID,
    pub name: String,
    /// First day of the tournament, timestamp in millis
    pub start_ts: i64,
    pub location: Option<String>,
    pub hotel_name: Option<String>,
    pub hotel_link: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl Entity for Tournament {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Tournament {
    pub fn travel_payload(&self) -> NotificationPayload {
        // Only treat the hotel as booked when both name and link are known
        let body = match (&self.hotel_name, &self.hotel_link) {
            (Some(hotel_name), Some(_)) => format!(
                "{} starts in 90 days. Confirm your reservation at {}.",
                self.name, hotel_name
            ),
            _ => format!(
                "{} starts in 90 days. Time to book hotel and travel.",
                self.name
            ),
        };

        let mut data = HashMap::new();
        data.insert("type".to_string(), "tournament_travel".to_string());
        data.insert("tournamentId".to_string(), self.id.as_string());

        NotificationPayload {
            title: "Tournament Travel Reminder".to_string(),
            body,
            data,
        }
    }
}
