use crate::shared::usecase::UseCase;
use dugout_domain::{NotificationKind, ID};
use dugout_infra::DugoutContext;

/// Removes the pending push for an `Announcement` that got deleted
/// before the worker picked it up
#[derive(Debug)]
pub struct CancelAnnouncementPushUseCase {
    pub announcement_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelAnnouncementPushUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "CancelAnnouncementPush";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .scheduled_notifications
            .delete_pending_by_reference(&self.announcement_id, &[NotificationKind::Announcement])
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(())
    }
}
