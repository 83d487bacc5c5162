use super::IEventRepo;
use dugout_domain::{CalendarEvent, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    title: String,
    event_type: String,
    start_ts: i64,
    duration: i64,
    location: Option<String>,
    created: i64,
    updated: i64,
}

impl TryFrom<EventRaw> for CalendarEvent {
    type Error = anyhow::Error;

    fn try_from(e: EventRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.event_uid.into(),
            title: e.title,
            event_type: e.event_type.parse()?,
            start_ts: e.start_ts,
            duration: e.duration,
            location: e.location,
            created: e.created,
            updated: e.updated,
        })
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &CalendarEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO calendar_events(
                event_uid, title, event_type, start_ts, duration, location, created, updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(&e.title)
        .bind(e.event_type.to_string())
        .bind(e.start_ts)
        .bind(e.duration)
        .bind(&e.location)
        .bind(e.created)
        .bind(e.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, e: &CalendarEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE calendar_events
            SET title = $2,
                event_type = $3,
                start_ts = $4,
                duration = $5,
                location = $6,
                updated = $7
            WHERE event_uid = $1
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(&e.title)
        .bind(e.event_type.to_string())
        .bind(e.start_ts)
        .bind(e.duration)
        .bind(&e.location)
        .bind(e.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<CalendarEvent>> {
        let event: Option<EventRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendar_events
            WHERE event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        event.map(CalendarEvent::try_from).transpose()
    }

    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<CalendarEvent>> {
        let event: Option<EventRaw> = sqlx::query_as(
            r#"
            DELETE FROM calendar_events
            WHERE event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        event.map(CalendarEvent::try_from).transpose()
    }
}
