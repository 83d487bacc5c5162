use super::IDeviceTokenRepo;
use crate::repos::shared::repo::DeleteResult;
use dugout_domain::{DeviceToken, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;

pub struct PostgresDeviceTokenRepo {
    pool: PgPool,
}

impl PostgresDeviceTokenRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DeviceTokenRaw {
    user_uid: Uuid,
    token: String,
    platform: String,
    active: bool,
}

impl TryFrom<DeviceTokenRaw> for DeviceToken {
    type Error = anyhow::Error;

    fn try_from(e: DeviceTokenRaw) -> anyhow::Result<Self> {
        Ok(Self {
            user_id: e.user_uid.into(),
            token: e.token,
            platform: e.platform.parse()?,
            active: e.active,
        })
    }
}

#[async_trait::async_trait]
impl IDeviceTokenRepo for PostgresDeviceTokenRepo {
    async fn upsert(&self, device_token: &DeviceToken) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO device_tokens(user_uid, token, platform, active)
            VALUES($1, $2, $3, $4)
            ON CONFLICT (user_uid, token)
            DO UPDATE SET platform = $3, active = $4
            "#,
        )
        .bind(device_token.user_id.inner_ref())
        .bind(&device_token.token)
        .bind(device_token.platform.to_string())
        .bind(device_token.active)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_active_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<DeviceToken>> {
        let tokens: Vec<DeviceTokenRaw> = sqlx::query_as(
            r#"
            SELECT * FROM device_tokens
            WHERE user_uid = $1 AND active = TRUE
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        tokens.into_iter().map(DeviceToken::try_from).collect()
    }

    async fn find_all_active(&self) -> anyhow::Result<Vec<DeviceToken>> {
        let tokens: Vec<DeviceTokenRaw> = sqlx::query_as(
            r#"
            SELECT * FROM device_tokens
            WHERE active = TRUE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        tokens.into_iter().map(DeviceToken::try_from).collect()
    }

    async fn deactivate(&self, tokens: &[String]) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE device_tokens
            SET active = FALSE
            WHERE token = ANY($1)
            "#,
        )
        .bind(tokens)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, user_id: &ID, token: &str) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM device_tokens
            WHERE user_uid = $1 AND token = $2
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(token)
        .execute(&self.pool)
        .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
