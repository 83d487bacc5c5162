use super::{
    create_announcement::CreateAnnouncementUseCase, delete_announcement::DeleteAnnouncementUseCase,
};
use crate::notification::{CancelAnnouncementPushUseCase, QueueAnnouncementPushUseCase};
use crate::shared::usecase::{execute, Subscriber};
use dugout_domain::Announcement;

/// Normal priority announcements never get a push, they just show up
/// in the app feed.
pub struct QueuePushOnAnnouncementCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateAnnouncementUseCase> for QueuePushOnAnnouncementCreated {
    async fn notify(&self, a: &Announcement, ctx: &dugout_infra::DugoutContext) {
        if !a.priority.requires_push() {
            return;
        }

        let queue_push = QueueAnnouncementPushUseCase {
            announcement_id: a.id.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(queue_push, ctx).await;
    }
}

pub struct CancelPendingPushOnAnnouncementDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteAnnouncementUseCase> for CancelPendingPushOnAnnouncementDeleted {
    async fn notify(&self, a: &Announcement, ctx: &dugout_infra::DugoutContext) {
        let cancel_push = CancelAnnouncementPushUseCase {
            announcement_id: a.id.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(cancel_push, ctx).await;
    }
}
