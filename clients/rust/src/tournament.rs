use crate::{APIResponse, BaseClient};
use dugout_api_structs::*;
use dugout_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct TournamentClient {
    base: Arc<BaseClient>,
}

pub struct CreateTournamentInput {
    pub name: String,
    pub start_ts: i64,
    pub location: Option<String>,
    pub hotel_name: Option<String>,
    pub hotel_link: Option<String>,
}

impl TournamentClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateTournamentInput,
    ) -> APIResponse<create_tournament::APIResponse> {
        let body = create_tournament::RequestBody {
            name: input.name,
            start_ts: input.start_ts,
            location: input.location,
            hotel_name: input.hotel_name,
            hotel_link: input.hotel_link,
        };

        self.base
            .post(body, "tournaments".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, tournament_id: ID) -> APIResponse<get_tournament::APIResponse> {
        self.base
            .get(format!("tournaments/{}", tournament_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, tournament_id: ID) -> APIResponse<delete_tournament::APIResponse> {
        self.base
            .delete(format!("tournaments/{}", tournament_id), StatusCode::OK)
            .await
    }
}
