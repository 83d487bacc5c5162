use crate::shared::usecase::UseCase;
use dugout_domain::{NotificationKind, ScheduledNotification, ID};
use dugout_infra::DugoutContext;

/// Queues the push for an announcement, due immediately so that the
/// next worker run picks it up. Whether an announcement warrants a push
/// at all is the caller's decision, queueing here is unconditional.
#[derive(Debug)]
pub struct QueueAnnouncementPushUseCase {
    pub announcement_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for QueueAnnouncementPushUseCase {
    type Response = ScheduledNotification;

    type Error = UseCaseError;

    const NAME: &'static str = "QueueAnnouncementPush";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        let notification = ScheduledNotification::new(
            NotificationKind::Announcement,
            self.announcement_id.clone(),
            ctx.sys.get_timestamp_millis(),
        );
        ctx.repos
            .scheduled_notifications
            .insert(&notification)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(notification)
    }
}
