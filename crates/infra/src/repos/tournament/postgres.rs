use super::ITournamentRepo;
use dugout_domain::{Tournament, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresTournamentRepo {
    pool: PgPool,
}

impl PostgresTournamentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TournamentRaw {
    tournament_uid: Uuid,
    name: String,
    start_ts: i64,
    location: Option<String>,
    hotel_name: Option<String>,
    hotel_link: Option<String>,
    created: i64,
    updated: i64,
}

impl From<TournamentRaw> for Tournament {
    fn from(e: TournamentRaw) -> Self {
        Self {
            id: e.tournament_uid.into(),
            name: e.name,
            start_ts: e.start_ts,
            location: e.location,
            hotel_name: e.hotel_name,
            hotel_link: e.hotel_link,
            created: e.created,
            updated: e.updated,
        }
    }
}

#[async_trait::async_trait]
impl ITournamentRepo for PostgresTournamentRepo {
    async fn insert(&self, tournament: &Tournament) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tournaments(
                tournament_uid, name, start_ts, location, hotel_name, hotel_link, created, updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(tournament.id.inner_ref())
        .bind(&tournament.name)
        .bind(tournament.start_ts)
        .bind(&tournament.location)
        .bind(&tournament.hotel_name)
        .bind(&tournament.hotel_link)
        .bind(tournament.created)
        .bind(tournament.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, tournament_id: &ID) -> anyhow::Result<Option<Tournament>> {
        let tournament: Option<TournamentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM tournaments
            WHERE tournament_uid = $1
            "#,
        )
        .bind(tournament_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(tournament.map(|t| t.into()))
    }

    async fn delete(&self, tournament_id: &ID) -> anyhow::Result<Option<Tournament>> {
        let tournament: Option<TournamentRaw> = sqlx::query_as(
            r#"
            DELETE FROM tournaments
            WHERE tournament_uid = $1
            RETURNING *
            "#,
        )
        .bind(tournament_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(tournament.map(|t| t.into()))
    }
}
