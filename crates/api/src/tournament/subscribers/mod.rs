use super::{
    create_tournament::CreateTournamentUseCase, delete_tournament::DeleteTournamentUseCase,
};
use crate::notification::{CancelTournamentTravelUseCase, ScheduleTournamentTravelUseCase};
use crate::shared::usecase::{execute, Subscriber};
use dugout_domain::Tournament;

pub struct ScheduleTravelOnTournamentCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateTournamentUseCase> for ScheduleTravelOnTournamentCreated {
    async fn notify(&self, t: &Tournament, ctx: &dugout_infra::DugoutContext) {
        let schedule_travel = ScheduleTournamentTravelUseCase {
            tournament: t.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(schedule_travel, ctx).await;
    }
}

pub struct CancelTravelOnTournamentDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteTournamentUseCase> for CancelTravelOnTournamentDeleted {
    async fn notify(&self, t: &Tournament, ctx: &dugout_infra::DugoutContext) {
        let cancel_travel = CancelTournamentTravelUseCase {
            tournament_id: t.id.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(cancel_travel, ctx).await;
    }
}
