use crate::error::DugoutError;
use crate::shared::auth::protect_cron_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use dugout_api_structs::dtos::NotificationResultDTO;
use dugout_api_structs::process_due_notifications::*;
use dugout_domain::{NotificationKind, NotificationPayload, ScheduledNotification, ID};
use dugout_infra::{send_notification_to_all, DugoutContext};
use tracing::{error, warn};

pub async fn process_due_notifications_controller(
    http_req: HttpRequest,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    protect_cron_route(&http_req, &ctx)?;

    if !ctx.push.is_configured() {
        return Ok(HttpResponse::Ok().json(APIResponse::Skipped {
            message: "Push delivery is not configured. Notifications were left in the queue."
                .to_string(),
        }));
    }

    let usecase = ProcessDueNotificationsUseCase;

    execute(usecase, &ctx)
        .await
        .map(|processed| {
            let results = processed
                .into_iter()
                .map(|p| match p.error {
                    Some(error) => NotificationResultDTO::failed(p.id, error),
                    None => NotificationResultDTO::sent(p.id),
                })
                .collect::<Vec<_>>();
            HttpResponse::Ok().json(APIResponse::Processed {
                processed: results.len(),
                results,
            })
        })
        .map_err(DugoutError::from)
}

/// Outcome of one drained notification row
#[derive(Debug)]
pub struct ProcessedNotification {
    pub id: ID,
    /// Set when delivery failed and the row was put back for retry
    pub error: Option<String>,
}

/// Drains the scheduled notifications that have become due and hands
/// them to the push gateway. Rows are claimed one at a time so that
/// overlapping cron runs never deliver the same notification twice.
#[derive(Debug)]
pub struct ProcessDueNotificationsUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for DugoutError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => DugoutError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ProcessDueNotificationsUseCase {
    type Response = Vec<ProcessedNotification>;

    type Error = UseCaseError;

    const NAME: &'static str = "ProcessDueNotifications";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let due = ctx
            .repos
            .scheduled_notifications
            .find_due(now, ctx.config.drain_batch_limit)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut processed = Vec::new();
        for notification in due {
            let claimed = match ctx
                .repos
                .scheduled_notifications
                .claim(&notification.id)
                .await
            {
                Ok(Some(claimed)) => claimed,
                // Lost the race against another worker run
                Ok(None) => continue,
                Err(_) => return Err(UseCaseError::StorageError),
            };

            match deliver(&claimed, ctx).await {
                Ok(_) => {
                    ctx.repos
                        .scheduled_notifications
                        .mark_sent(&claimed.id, ctx.sys.get_timestamp_millis())
                        .await
                        .map_err(|_| UseCaseError::StorageError)?;
                    processed.push(ProcessedNotification {
                        id: claimed.id,
                        error: None,
                    });
                }
                Err(e) => {
                    if let Err(release_err) =
                        ctx.repos.scheduled_notifications.release(&claimed.id).await
                    {
                        error!(
                            "Unable to release claimed notification {}. Err: {:?}",
                            claimed.id, release_err
                        );
                    }
                    processed.push(ProcessedNotification {
                        id: claimed.id,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(processed)
    }
}

async fn deliver(notification: &ScheduledNotification, ctx: &DugoutContext) -> anyhow::Result<()> {
    let payload = match resolve_payload(notification, ctx).await? {
        Some(payload) => payload,
        None => {
            // The referenced entity was deleted after this row was
            // queued. Count the row as handled so it is not retried.
            warn!(
                "Scheduled notification {} references a {} that no longer exists. Nothing to send.",
                notification.id, notification.kind
            );
            return Ok(());
        }
    };

    send_notification_to_all(&payload, ctx).await?;
    Ok(())
}

async fn resolve_payload(
    notification: &ScheduledNotification,
    ctx: &DugoutContext,
) -> anyhow::Result<Option<NotificationPayload>> {
    let payload = match notification.kind {
        NotificationKind::EventReminder(lead) => ctx
            .repos
            .events
            .find(&notification.reference_id)
            .await?
            .map(|event| event.reminder_payload(lead)),
        NotificationKind::TournamentTravel => ctx
            .repos
            .tournaments
            .find(&notification.reference_id)
            .await?
            .map(|tournament| tournament.travel_payload()),
        NotificationKind::Announcement => ctx
            .repos
            .announcements
            .find(&notification.reference_id)
            .await?
            .map(|announcement| announcement.push_payload()),
    };
    Ok(payload)
}
