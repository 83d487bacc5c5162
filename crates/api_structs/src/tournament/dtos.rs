use dugout_domain::{Tournament, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDTO {
    pub id: ID,
    pub name: String,
    pub start_ts: i64,
    pub location: Option<String>,
    pub hotel_name: Option<String>,
    pub hotel_link: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl TournamentDTO {
    pub fn new(tournament: Tournament) -> Self {
        Self {
            id: tournament.id.clone(),
            name: tournament.name,
            start_ts: tournament.start_ts,
            location: tournament.location,
            hotel_name: tournament.hotel_name,
            hotel_link: tournament.hotel_link,
            created: tournament.created,
            updated: tournament.updated,
        }
    }
}
