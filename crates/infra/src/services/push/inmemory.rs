use super::{IPushGateway, MulticastSummary};
use dugout_domain::NotificationPayload;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedSend {
    pub tokens: Vec<String>,
    pub payload: NotificationPayload,
}

/// Records sends instead of calling FCM. Tokens registered through
/// `report_invalid` are reported back as invalid, and `break_gateway`
/// makes every batch fail, so tests can exercise the reconciliation
/// and retry paths.
pub struct InMemoryPushGateway {
    pub sends: Mutex<Vec<RecordedSend>>,
    invalid_tokens: Mutex<Vec<String>>,
    broken: Mutex<bool>,
}

impl InMemoryPushGateway {
    pub fn new() -> Self {
        Self {
            sends: Mutex::new(Vec::new()),
            invalid_tokens: Mutex::new(Vec::new()),
            broken: Mutex::new(false),
        }
    }

    pub fn report_invalid(&self, token: &str) {
        self.invalid_tokens.lock().unwrap().push(token.to_string());
    }

    pub fn break_gateway(&self) {
        *self.broken.lock().unwrap() = true;
    }

    pub fn repair_gateway(&self) {
        *self.broken.lock().unwrap() = false;
    }
}

impl Default for InMemoryPushGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IPushGateway for InMemoryPushGateway {
    fn is_configured(&self) -> bool {
        true
    }

    async fn send_multicast(
        &self,
        tokens: &[String],
        payload: &NotificationPayload,
    ) -> anyhow::Result<MulticastSummary> {
        if *self.broken.lock().unwrap() {
            return Err(anyhow::anyhow!("Push gateway is unavailable"));
        }

        let invalid = self.invalid_tokens.lock().unwrap();
        let invalid_tokens = tokens
            .iter()
            .filter(|token| invalid.contains(token))
            .cloned()
            .collect::<Vec<_>>();

        self.sends.lock().unwrap().push(RecordedSend {
            tokens: tokens.to_vec(),
            payload: payload.clone(),
        });

        Ok(MulticastSummary {
            sent: tokens.len() - invalid_tokens.len(),
            failed: invalid_tokens.len(),
            invalid_tokens,
        })
    }
}
