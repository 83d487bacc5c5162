use dugout_utils::create_random_secret;
use tracing::{info, log::warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Credentials for the Firebase service account used to send push
/// notifications. All three values have to be present for the push
/// gateway to be configured.
#[derive(Debug, Clone)]
pub struct FirebaseSettings {
    pub project_id: String,
    pub client_email: String,
    pub private_key: String,
}

impl FirebaseSettings {
    fn from_env() -> Option<Self> {
        let project_id = std::env::var("FIREBASE_PROJECT_ID").ok()?;
        let client_email = std::env::var("FIREBASE_CLIENT_EMAIL").ok()?;
        let private_key = std::env::var("FIREBASE_PRIVATE_KEY").ok()?;

        Some(Self {
            project_id,
            client_email,
            // Deployment environments usually store the key with escaped newlines
            private_key: private_key.replace("\\n", "\n"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Which environment the application runs in. The cron endpoint only
    /// enforces its secret in `Production`.
    pub environment: Environment,
    /// Shared secret the external cron service has to send in the
    /// `x-cron-secret` header when triggering the notification worker
    pub cron_secret: String,
    /// Firebase push credentials, if any were provided
    pub firebase: Option<FirebaseSettings>,
    /// Maximum number of due notifications a single worker invocation
    /// will process
    pub drain_batch_limit: i64,
}

impl Config {
    pub fn new() -> Self {
        let environment = match std::env::var("APP_ENVIRONMENT") {
            Ok(env) if env == "production" => Environment::Production,
            Ok(env) if env == "development" => Environment::Development,
            Ok(env) => {
                warn!(
                    "The given APP_ENVIRONMENT: {} is not valid, falling back to development.",
                    env
                );
                Environment::Development
            }
            Err(_) => Environment::Development,
        };

        let cron_secret = match std::env::var("CRON_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find CRON_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(16);
                info!(
                    "Secret for triggering the notification worker was generated and set to: {}",
                    secret
                );
                secret
            }
        };

        let firebase = FirebaseSettings::from_env();
        if firebase.is_none() {
            info!("Firebase credentials are not set, push notifications will be skipped.");
        }

        let port = std::env::var("PORT").unwrap_or_else(|_| "5000".into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, using the default port instead.",
                    port
                );
                5000
            }
        };

        Self {
            port,
            environment,
            cron_secret,
            firebase,
            drain_batch_limit: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
