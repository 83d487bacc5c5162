use super::IScheduledNotificationRepo;
use crate::repos::shared::repo::DeleteResult;
use dugout_domain::{NotificationKind, ScheduledNotification, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;

pub struct PostgresScheduledNotificationRepo {
    pool: PgPool,
}

impl PostgresScheduledNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ScheduledNotificationRaw {
    notification_uid: Uuid,
    kind: String,
    reference_uid: Uuid,
    scheduled_for: i64,
    status: String,
    sent_at: Option<i64>,
}

impl TryFrom<ScheduledNotificationRaw> for ScheduledNotification {
    type Error = anyhow::Error;

    fn try_from(raw: ScheduledNotificationRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.notification_uid.into(),
            kind: raw.kind.parse()?,
            reference_id: raw.reference_uid.into(),
            scheduled_for: raw.scheduled_for,
            status: raw.status.parse()?,
            sent_at: raw.sent_at,
        })
    }
}

#[async_trait::async_trait]
impl IScheduledNotificationRepo for PostgresScheduledNotificationRepo {
    async fn insert(&self, notification: &ScheduledNotification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO scheduled_notifications(
                notification_uid,
                kind,
                reference_uid,
                scheduled_for,
                status,
                sent_at
            )
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(notification.id.inner_ref())
        .bind(notification.kind.to_string())
        .bind(notification.reference_id.inner_ref())
        .bind(notification.scheduled_for)
        .bind(notification.status.to_string())
        .bind(notification.sent_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(
        &self,
        notification_id: &ID,
    ) -> anyhow::Result<Option<ScheduledNotification>> {
        let res = sqlx::query_as::<_, ScheduledNotificationRaw>(
            r#"
            SELECT * FROM scheduled_notifications
            WHERE notification_uid = $1
            "#,
        )
        .bind(notification_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        res.map(ScheduledNotification::try_from).transpose()
    }

    async fn find_due(
        &self,
        before: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<ScheduledNotification>> {
        let rows = sqlx::query_as::<_, ScheduledNotificationRaw>(
            r#"
            SELECT * FROM scheduled_notifications
            WHERE status = 'pending' AND scheduled_for <= $1
            ORDER BY scheduled_for
            LIMIT $2
            "#,
        )
        .bind(before)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(ScheduledNotification::try_from)
            .collect()
    }

    async fn claim(
        &self,
        notification_id: &ID,
    ) -> anyhow::Result<Option<ScheduledNotification>> {
        // The status guard makes the claim atomic, two workers racing on
        // the same row will get it at most once
        let res = sqlx::query_as::<_, ScheduledNotificationRaw>(
            r#"
            UPDATE scheduled_notifications
            SET status = 'in_progress'
            WHERE notification_uid = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(notification_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        res.map(ScheduledNotification::try_from).transpose()
    }

    async fn mark_sent(&self, notification_id: &ID, sent_at: i64) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE scheduled_notifications
            SET status = 'sent', sent_at = $2
            WHERE notification_uid = $1
            "#,
        )
        .bind(notification_id.inner_ref())
        .bind(sent_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn release(&self, notification_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE scheduled_notifications
            SET status = 'pending'
            WHERE notification_uid = $1 AND status = 'in_progress'
            "#,
        )
        .bind(notification_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_pending_by_reference(
        &self,
        reference_id: &ID,
        kinds: &[NotificationKind],
    ) -> anyhow::Result<DeleteResult> {
        let kinds = kinds.iter().map(|k| k.to_string()).collect::<Vec<_>>();
        let res = sqlx::query(
            r#"
            DELETE FROM scheduled_notifications
            WHERE reference_uid = $1 AND kind = ANY($2) AND status = 'pending'
            "#,
        )
        .bind(reference_id.inner_ref())
        .bind(&kinds)
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
