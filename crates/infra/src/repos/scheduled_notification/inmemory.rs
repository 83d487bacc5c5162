use super::IScheduledNotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use dugout_domain::{NotificationKind, NotificationStatus, ScheduledNotification, ID};

pub struct InMemoryScheduledNotificationRepo {
    notifications: std::sync::Mutex<Vec<ScheduledNotification>>,
}

impl InMemoryScheduledNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IScheduledNotificationRepo for InMemoryScheduledNotificationRepo {
    async fn insert(&self, notification: &ScheduledNotification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find(
        &self,
        notification_id: &ID,
    ) -> anyhow::Result<Option<ScheduledNotification>> {
        Ok(find(notification_id, &self.notifications))
    }

    async fn find_due(
        &self,
        before: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<ScheduledNotification>> {
        let mut due = find_by(&self.notifications, |n| {
            n.status == NotificationStatus::Pending && n.scheduled_for <= before
        });
        due.sort_by_key(|n| n.scheduled_for);
        due.truncate(limit as usize);
        Ok(due)
    }

    async fn claim(
        &self,
        notification_id: &ID,
    ) -> anyhow::Result<Option<ScheduledNotification>> {
        // Single lock over check and update so concurrent claims for the
        // same row cannot both win
        let mut notifications = self.notifications.lock().unwrap();
        for n in notifications.iter_mut() {
            if n.id == *notification_id && n.status == NotificationStatus::Pending {
                n.status = NotificationStatus::InProgress;
                return Ok(Some(n.clone()));
            }
        }
        Ok(None)
    }

    async fn mark_sent(&self, notification_id: &ID, sent_at: i64) -> anyhow::Result<()> {
        update_many(
            &self.notifications,
            |n| n.id == *notification_id,
            |n| {
                n.status = NotificationStatus::Sent;
                n.sent_at = Some(sent_at);
            },
        );
        Ok(())
    }

    async fn release(&self, notification_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.notifications,
            |n| n.id == *notification_id && n.status == NotificationStatus::InProgress,
            |n| n.status = NotificationStatus::Pending,
        );
        Ok(())
    }

    async fn delete_pending_by_reference(
        &self,
        reference_id: &ID,
        kinds: &[NotificationKind],
    ) -> anyhow::Result<DeleteResult> {
        let res = delete_by(&self.notifications, |n| {
            n.reference_id == *reference_id
                && n.status == NotificationStatus::Pending
                && kinds.contains(&n.kind)
        });
        Ok(res)
    }
}
