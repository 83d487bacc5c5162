use crate::shared::usecase::UseCase;
use dugout_domain::{NotificationKind, ID};
use dugout_infra::DugoutContext;

/// Removes the pending travel reminder for a `Tournament`
#[derive(Debug)]
pub struct CancelTournamentTravelUseCase {
    pub tournament_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelTournamentTravelUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "CancelTournamentTravel";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .scheduled_notifications
            .delete_pending_by_reference(&self.tournament_id, &[NotificationKind::TournamentTravel])
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(())
    }
}
