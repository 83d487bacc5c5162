use crate::shared::usecase::UseCase;
use dugout_domain::{NotificationKind, ID};
use dugout_infra::DugoutContext;

/// Removes the pending push reminders for a `CalendarEvent`. Reminders
/// that were already sent stay around as history.
#[derive(Debug)]
pub struct CancelEventRemindersUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelEventRemindersUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "CancelEventReminders";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .scheduled_notifications
            .delete_pending_by_reference(&self.event_id, &NotificationKind::event_reminders())
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(())
    }
}
