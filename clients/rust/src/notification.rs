use crate::{APIResponse, BaseClient};
use dugout_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

/// Client for the endpoint the external cron service calls. Requires the
/// cron secret to be set on the SDK when the server runs in production.
#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn process_due(&self) -> APIResponse<process_due_notifications::APIResponse> {
        self.base
            .get("cron/process-notifications".into(), StatusCode::OK)
            .await
    }
}
