pub mod fcm;
mod inmemory;

pub use fcm::FcmPushGateway;
pub use inmemory::{InMemoryPushGateway, RecordedSend};

use crate::DugoutContext;
use dugout_domain::{NotificationPayload, ID};
use tracing::warn;

/// FCM rejects multicast batches above 500 tokens
pub const MULTICAST_BATCH_LIMIT: usize = 500;

#[derive(Debug, Default, PartialEq)]
pub struct MulticastSummary {
    pub sent: usize,
    pub failed: usize,
    /// Tokens the provider reported as permanently invalid. These should
    /// be deactivated so they are skipped on the next fan-out.
    pub invalid_tokens: Vec<String>,
}

/// Outcome of a fan-out over all batches of a send
#[derive(Debug, Default, PartialEq)]
pub struct SendSummary {
    pub sent: usize,
    pub failed: usize,
}

#[async_trait::async_trait]
pub trait IPushGateway: Send + Sync {
    fn is_configured(&self) -> bool;
    /// Deliver the payload to a batch of at most [`MULTICAST_BATCH_LIMIT`]
    /// tokens. An `Err` means the whole batch failed, individual token
    /// failures are reported in the summary.
    async fn send_multicast(
        &self,
        tokens: &[String],
        payload: &NotificationPayload,
    ) -> anyhow::Result<MulticastSummary>;
}

/// Stands in when Firebase credentials are not provided. Callers are
/// expected to check `is_configured` before draining the queue.
pub struct UnconfiguredPushGateway;

#[async_trait::async_trait]
impl IPushGateway for UnconfiguredPushGateway {
    fn is_configured(&self) -> bool {
        false
    }

    async fn send_multicast(
        &self,
        _tokens: &[String],
        _payload: &NotificationPayload,
    ) -> anyhow::Result<MulticastSummary> {
        Err(anyhow::anyhow!("Push notifications are not configured"))
    }
}

pub async fn send_notification_to_all(
    payload: &NotificationPayload,
    ctx: &DugoutContext,
) -> anyhow::Result<SendSummary> {
    let tokens = ctx.repos.device_tokens.find_all_active().await?;
    let tokens = tokens.into_iter().map(|t| t.token).collect::<Vec<_>>();
    send_notification_to_tokens(&tokens, payload, ctx).await
}

pub async fn send_notification_to_user(
    user_id: &ID,
    payload: &NotificationPayload,
    ctx: &DugoutContext,
) -> anyhow::Result<SendSummary> {
    let tokens = ctx.repos.device_tokens.find_active_by_user(user_id).await?;
    let tokens = tokens.into_iter().map(|t| t.token).collect::<Vec<_>>();
    send_notification_to_tokens(&tokens, payload, ctx).await
}

pub async fn send_notification_to_tokens(
    tokens: &[String],
    payload: &NotificationPayload,
    ctx: &DugoutContext,
) -> anyhow::Result<SendSummary> {
    let mut summary = SendSummary::default();
    let mut invalid_tokens = Vec::new();

    for batch in tokens.chunks(MULTICAST_BATCH_LIMIT) {
        let res = ctx.push.send_multicast(batch, payload).await?;
        summary.sent += res.sent;
        summary.failed += res.failed;
        invalid_tokens.extend(res.invalid_tokens);
    }

    if !invalid_tokens.is_empty() {
        warn!(
            "Push provider reported {} invalid device tokens. Going to deactivate them.",
            invalid_tokens.len()
        );
        if let Err(e) = ctx.repos.device_tokens.deactivate(&invalid_tokens).await {
            warn!("Unable to deactivate invalid device tokens. Error: {:?}", e);
        }
    }

    Ok(summary)
}
