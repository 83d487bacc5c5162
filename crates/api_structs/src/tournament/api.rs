use crate::dtos::TournamentDTO;
use dugout_domain::{Tournament, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub tournament: TournamentDTO,
}

impl TournamentResponse {
    pub fn new(tournament: Tournament) -> Self {
        Self {
            tournament: TournamentDTO::new(tournament),
        }
    }
}

pub mod create_tournament {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub start_ts: i64,
        pub location: Option<String>,
        pub hotel_name: Option<String>,
        pub hotel_link: Option<String>,
    }

    pub type APIResponse = TournamentResponse;
}

pub mod get_tournament {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub tournament_id: ID,
    }

    pub type APIResponse = TournamentResponse;
}

pub mod delete_tournament {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub tournament_id: ID,
    }

    pub type APIResponse = TournamentResponse;
}
