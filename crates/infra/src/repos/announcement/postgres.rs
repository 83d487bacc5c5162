use super::IAnnouncementRepo;
use dugout_domain::{Announcement, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;

pub struct PostgresAnnouncementRepo {
    pool: PgPool,
}

impl PostgresAnnouncementRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AnnouncementRaw {
    announcement_uid: Uuid,
    title: String,
    content: String,
    priority: String,
    created: i64,
    updated: i64,
}

impl TryFrom<AnnouncementRaw> for Announcement {
    type Error = anyhow::Error;

    fn try_from(e: AnnouncementRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.announcement_uid.into(),
            title: e.title,
            content: e.content,
            priority: e.priority.parse()?,
            created: e.created,
            updated: e.updated,
        })
    }
}

#[async_trait::async_trait]
impl IAnnouncementRepo for PostgresAnnouncementRepo {
    async fn insert(&self, announcement: &Announcement) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO announcements(
                announcement_uid, title, content, priority, created, updated
            )
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(announcement.id.inner_ref())
        .bind(&announcement.title)
        .bind(&announcement.content)
        .bind(announcement.priority.to_string())
        .bind(announcement.created)
        .bind(announcement.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, announcement_id: &ID) -> anyhow::Result<Option<Announcement>> {
        let announcement: Option<AnnouncementRaw> = sqlx::query_as(
            r#"
            SELECT * FROM announcements
            WHERE announcement_uid = $1
            "#,
        )
        .bind(announcement_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        announcement.map(Announcement::try_from).transpose()
    }

    async fn delete(&self, announcement_id: &ID) -> anyhow::Result<Option<Announcement>> {
        let announcement: Option<AnnouncementRaw> = sqlx::query_as(
            r#"
            DELETE FROM announcements
            WHERE announcement_uid = $1
            RETURNING *
            "#,
        )
        .bind(announcement_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        announcement.map(Announcement::try_from).transpose()
    }
}
