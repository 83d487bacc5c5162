mod announcement;
mod device_token;
mod event;
mod scheduled_notification;
mod shared;
mod tournament;

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

pub use announcement::{IAnnouncementRepo, InMemoryAnnouncementRepo, PostgresAnnouncementRepo};
pub use device_token::{IDeviceTokenRepo, InMemoryDeviceTokenRepo, PostgresDeviceTokenRepo};
pub use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
pub use scheduled_notification::{
    IScheduledNotificationRepo, InMemoryScheduledNotificationRepo,
    PostgresScheduledNotificationRepo,
};
pub use shared::repo::DeleteResult;
pub use tournament::{ITournamentRepo, InMemoryTournamentRepo, PostgresTournamentRepo};

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub tournaments: Arc<dyn ITournamentRepo>,
    pub announcements: Arc<dyn IAnnouncementRepo>,
    pub device_tokens: Arc<dyn IDeviceTokenRepo>,
    pub scheduled_notifications: Arc<dyn IScheduledNotificationRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            tournaments: Arc::new(PostgresTournamentRepo::new(pool.clone())),
            announcements: Arc::new(PostgresAnnouncementRepo::new(pool.clone())),
            device_tokens: Arc::new(PostgresDeviceTokenRepo::new(pool.clone())),
            scheduled_notifications: Arc::new(PostgresScheduledNotificationRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            tournaments: Arc::new(InMemoryTournamentRepo::new()),
            announcements: Arc::new(InMemoryAnnouncementRepo::new()),
            device_tokens: Arc::new(InMemoryDeviceTokenRepo::new()),
            scheduled_notifications: Arc::new(InMemoryScheduledNotificationRepo::new()),
        }
    }
}
