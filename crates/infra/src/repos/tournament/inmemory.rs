use super::ITournamentRepo;
use crate::repos::shared::inmemory_repo::*;
use dugout_domain::{Tournament, ID};
use std::sync::Mutex;

pub struct InMemoryTournamentRepo {
    tournaments: Mutex<Vec<Tournament>>,
}

impl InMemoryTournamentRepo {
    pub fn new() -> Self {
        Self {
            tournaments: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITournamentRepo for InMemoryTournamentRepo {
    async fn insert(&self, tournament: &Tournament) -> anyhow::Result<()> {
        insert(tournament, &self.tournaments);
        Ok(())
    }

    async fn find(&self, tournament_id: &ID) -> anyhow::Result<Option<Tournament>> {
        Ok(find(tournament_id, &self.tournaments))
    }

    async fn delete(&self, tournament_id: &ID) -> anyhow::Result<Option<Tournament>> {
        Ok(delete(tournament_id, &self.tournaments))
    }
}
