mod inmemory;
mod postgres;

pub use inmemory::InMemoryTournamentRepo;
pub use postgres::PostgresTournamentRepo;

use dugout_domain::{Tournament, ID};

#[async_trait::async_trait]
pub trait ITournamentRepo: Send + Sync {
    async fn insert(&self, tournament: &Tournament) -> anyhow::Result<()>;
    async fn find(&self, tournament_id: &ID) -> anyhow::Result<Option<Tournament>>;
    async fn delete(&self, tournament_id: &ID) -> anyhow::Result<Option<Tournament>>;
}
