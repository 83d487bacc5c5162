mod inmemory;
mod postgres;

pub use inmemory::InMemoryScheduledNotificationRepo;
pub use postgres::PostgresScheduledNotificationRepo;

use crate::repos::shared::repo::DeleteResult;
use dugout_domain::{NotificationKind, ScheduledNotification, ID};

#[async_trait::async_trait]
pub trait IScheduledNotificationRepo: Send + Sync {
    async fn insert(&self, notification: &ScheduledNotification) -> anyhow::Result<()>;
    async fn find(&self, notification_id: &ID) -> anyhow::Result<Option<ScheduledNotification>>;
    /// Pending notifications due at `before`, oldest first
    async fn find_due(
        &self,
        before: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<ScheduledNotification>>;
    /// Atomically move a pending notification to in progress. Returns
    /// `None` when the row was already claimed by another worker, already
    /// sent or deleted in the meantime.
    async fn claim(&self, notification_id: &ID)
        -> anyhow::Result<Option<ScheduledNotification>>;
    async fn mark_sent(&self, notification_id: &ID, sent_at: i64) -> anyhow::Result<()>;
    /// Put a claimed notification back to pending so that a later worker
    /// run retries it
    async fn release(&self, notification_id: &ID) -> anyhow::Result<()>;
    /// Delete pending notifications of the given kinds referencing the
    /// given entity. Rows that were already sent are kept as history.
    async fn delete_pending_by_reference(
        &self,
        reference_id: &ID,
        kinds: &[NotificationKind],
    ) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod test {
    use crate::setup_context;
    use crate::DugoutContext;
    use dugout_domain::{
        NotificationKind, NotificationStatus, ReminderLead, ScheduledNotification, ID,
    };

    async fn contexts() -> Vec<DugoutContext> {
        vec![DugoutContext::create_inmemory(), setup_context().await]
    }

    #[tokio::test]
    async fn insert_and_find() {
        for ctx in contexts().await {
            let notification = ScheduledNotification::new(
                NotificationKind::Announcement,
                Default::default(),
                100,
            );
            ctx.repos
                .scheduled_notifications
                .insert(&notification)
                .await
                .expect("To insert notification");

            let found = ctx
                .repos
                .scheduled_notifications
                .find(&notification.id)
                .await
                .expect("To query notification")
                .expect("Notification to be found");
            assert_eq!(found.id, notification.id);
            assert_eq!(found.kind, NotificationKind::Announcement);
            assert_eq!(found.status, NotificationStatus::Pending);
            assert_eq!(found.scheduled_for, 100);
            assert!(found.sent_at.is_none());

            let missing = ctx
                .repos
                .scheduled_notifications
                .find(&ID::new())
                .await
                .expect("To query notification");
            assert!(missing.is_none());
        }
    }

    #[tokio::test]
    async fn find_due_filters_orders_and_limits() {
        for ctx in contexts().await {
            let reference_id = ID::new();
            for scheduled_for in [300, 100, 200, 900].iter() {
                let notification = ScheduledNotification::new(
                    NotificationKind::Announcement,
                    reference_id.clone(),
                    *scheduled_for,
                );
                ctx.repos
                    .scheduled_notifications
                    .insert(&notification)
                    .await
                    .unwrap();
            }

            let due = ctx
                .repos
                .scheduled_notifications
                .find_due(500, 50)
                .await
                .expect("To query due notifications");
            let scheduled_fors = due.iter().map(|n| n.scheduled_for).collect::<Vec<_>>();
            assert_eq!(scheduled_fors, vec![100, 200, 300]);

            let limited = ctx
                .repos
                .scheduled_notifications
                .find_due(500, 2)
                .await
                .unwrap();
            assert_eq!(limited.len(), 2);
            assert_eq!(limited[0].scheduled_for, 100);
        }
    }

    #[tokio::test]
    async fn claim_succeeds_only_once() {
        for ctx in contexts().await {
            let notification = ScheduledNotification::new(
                NotificationKind::EventReminder(ReminderLead::Hours24),
                Default::default(),
                100,
            );
            ctx.repos
                .scheduled_notifications
                .insert(&notification)
                .await
                .unwrap();

            let claimed = ctx
                .repos
                .scheduled_notifications
                .claim(&notification.id)
                .await
                .expect("To claim notification");
            assert!(claimed.is_some());
            assert_eq!(claimed.unwrap().status, NotificationStatus::InProgress);

            let claimed_again = ctx
                .repos
                .scheduled_notifications
                .claim(&notification.id)
                .await
                .unwrap();
            assert!(claimed_again.is_none());
        }
    }

    #[tokio::test]
    async fn claimed_notifications_are_not_due() {
        for ctx in contexts().await {
            let notification = ScheduledNotification::new(
                NotificationKind::Announcement,
                Default::default(),
                100,
            );
            ctx.repos
                .scheduled_notifications
                .insert(&notification)
                .await
                .unwrap();
            ctx.repos
                .scheduled_notifications
                .claim(&notification.id)
                .await
                .unwrap();

            let due = ctx
                .repos
                .scheduled_notifications
                .find_due(500, 50)
                .await
                .unwrap();
            assert!(due.is_empty());
        }
    }

    #[tokio::test]
    async fn mark_sent_is_terminal() {
        for ctx in contexts().await {
            let notification = ScheduledNotification::new(
                NotificationKind::TournamentTravel,
                Default::default(),
                100,
            );
            ctx.repos
                .scheduled_notifications
                .insert(&notification)
                .await
                .unwrap();
            ctx.repos
                .scheduled_notifications
                .claim(&notification.id)
                .await
                .unwrap();
            ctx.repos
                .scheduled_notifications
                .mark_sent(&notification.id, 150)
                .await
                .expect("To mark notification sent");

            let found = ctx
                .repos
                .scheduled_notifications
                .find(&notification.id)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(found.status, NotificationStatus::Sent);
            assert_eq!(found.sent_at, Some(150));

            // A sent notification can neither be claimed nor drained again
            let claimed = ctx
                .repos
                .scheduled_notifications
                .claim(&notification.id)
                .await
                .unwrap();
            assert!(claimed.is_none());
        }
    }

    #[tokio::test]
    async fn release_makes_notification_due_again() {
        for ctx in contexts().await {
            let notification = ScheduledNotification::new(
                NotificationKind::Announcement,
                Default::default(),
                100,
            );
            ctx.repos
                .scheduled_notifications
                .insert(&notification)
                .await
                .unwrap();
            ctx.repos
                .scheduled_notifications
                .claim(&notification.id)
                .await
                .unwrap();
            ctx.repos
                .scheduled_notifications
                .release(&notification.id)
                .await
                .expect("To release notification");

            let due = ctx
                .repos
                .scheduled_notifications
                .find_due(500, 50)
                .await
                .unwrap();
            assert_eq!(due.len(), 1);
            assert_eq!(due[0].status, NotificationStatus::Pending);
        }
    }

    #[tokio::test]
    async fn cancellation_deletes_only_matching_pending_rows() {
        for ctx in contexts().await {
            let event_id = ID::new();
            let other_event_id = ID::new();

            let reminder_24h = ScheduledNotification::new(
                NotificationKind::EventReminder(ReminderLead::Hours24),
                event_id.clone(),
                100,
            );
            let reminder_1h = ScheduledNotification::new(
                NotificationKind::EventReminder(ReminderLead::Hours1),
                event_id.clone(),
                200,
            );
            let mut sent_reminder = ScheduledNotification::new(
                NotificationKind::EventReminder(ReminderLead::Hours24),
                event_id.clone(),
                50,
            );
            sent_reminder.status = NotificationStatus::Sent;
            sent_reminder.sent_at = Some(60);
            let other_reminder = ScheduledNotification::new(
                NotificationKind::EventReminder(ReminderLead::Hours24),
                other_event_id.clone(),
                100,
            );

            for n in [&reminder_24h, &reminder_1h, &sent_reminder, &other_reminder].iter() {
                ctx.repos.scheduled_notifications.insert(n).await.unwrap();
            }

            let res = ctx
                .repos
                .scheduled_notifications
                .delete_pending_by_reference(&event_id, &NotificationKind::event_reminders())
                .await
                .expect("To delete pending notifications");
            assert_eq!(res.deleted_count, 2);

            // Sent history is preserved
            let sent = ctx
                .repos
                .scheduled_notifications
                .find(&sent_reminder.id)
                .await
                .unwrap();
            assert!(sent.is_some());

            // Other events keep their reminders
            let other = ctx
                .repos
                .scheduled_notifications
                .find(&other_reminder.id)
                .await
                .unwrap();
            assert!(other.is_some());
        }
    }
}
