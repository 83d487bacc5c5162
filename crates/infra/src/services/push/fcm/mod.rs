mod auth_provider;
mod messaging_api;

use super::{IPushGateway, MulticastSummary};
use crate::config::FirebaseSettings;
use auth_provider::AuthProvider;
use dugout_domain::NotificationPayload;
use messaging_api::{FcmRestApi, SendOutcome};

// https://firebase.google.com/docs/cloud-messaging/send-message

pub struct FcmPushGateway {
    auth: AuthProvider,
    api: FcmRestApi,
}

impl FcmPushGateway {
    pub fn new(settings: FirebaseSettings) -> Self {
        Self {
            api: FcmRestApi::new(settings.project_id.clone()),
            auth: AuthProvider::new(settings),
        }
    }
}

#[async_trait::async_trait]
impl IPushGateway for FcmPushGateway {
    fn is_configured(&self) -> bool {
        true
    }

    async fn send_multicast(
        &self,
        tokens: &[String],
        payload: &NotificationPayload,
    ) -> anyhow::Result<MulticastSummary> {
        let access_token = self.auth.get_access_token().await?;

        let mut summary = MulticastSummary::default();
        for token in tokens {
            match self.api.send(&access_token, token, payload).await {
                SendOutcome::Delivered => summary.sent += 1,
                SendOutcome::InvalidToken => {
                    summary.failed += 1;
                    summary.invalid_tokens.push(token.clone());
                }
                SendOutcome::Failed => summary.failed += 1,
            }
        }

        Ok(summary)
    }
}
