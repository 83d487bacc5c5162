mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, Environment, FirebaseSettings};
use repos::Repos;
pub use repos::{
    DeleteResult, IAnnouncementRepo, IDeviceTokenRepo, IEventRepo, IScheduledNotificationRepo,
    ITournamentRepo,
};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct DugoutContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub push: Arc<dyn IPushGateway>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl DugoutContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            push: Arc::new(InMemoryPushGateway::new()),
        }
    }

    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let push: Arc<dyn IPushGateway> = match config.firebase.clone() {
            Some(settings) => Arc::new(FcmPushGateway::new(settings)),
            None => Arc::new(UnconfiguredPushGateway),
        };
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            push,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> DugoutContext {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(connection_string) => {
            info!(
                "{} env var was provided. Going to use postgres.",
                PSQL_CONNECTION_STRING
            );
            run_migration(&connection_string)
                .await
                .expect("Database migrations to succeed");
            DugoutContext::create(ContextParams {
                postgres_connection_string: connection_string,
            })
            .await
        }
        Err(_) => {
            info!(
                "{} env var was not provided. Going to use inmemory infra.",
                PSQL_CONNECTION_STRING
            );
            DugoutContext::create_inmemory()
        }
    }
}

pub async fn run_migration(connection_string: &str) -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(connection_string)
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
