use dugout_domain::NotificationPayload;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::error;

// https://firebase.google.com/docs/reference/fcm/rest/v1/projects.messages

const FCM_API_BASE_URL: &str = "https://fcm.googleapis.com/v1";

/// Error statuses FCM uses for tokens that will never become deliverable
/// again. INVALID_ARGUMENT covers malformed registration tokens.
const INVALID_TOKEN_STATUSES: [&str; 3] = ["UNREGISTERED", "NOT_FOUND", "INVALID_ARGUMENT"];

pub struct FcmRestApi {
    client: Client,
    project_id: String,
}

#[derive(Debug, Serialize)]
struct FcmNotification<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Serialize)]
struct FcmMessage<'a> {
    token: &'a str,
    notification: FcmNotification<'a>,
    data: &'a HashMap<String, String>,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    message: FcmMessage<'a>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    status: String,
    message: String,
}

#[derive(Debug, PartialEq)]
pub enum SendOutcome {
    Delivered,
    /// The token is gone for good and should be deactivated
    InvalidToken,
    Failed,
}

impl FcmRestApi {
    pub fn new(project_id: String) -> Self {
        Self {
            client: Client::new(),
            project_id,
        }
    }

    pub async fn send(
        &self,
        access_token: &str,
        token: &str,
        payload: &NotificationPayload,
    ) -> SendOutcome {
        let body = SendMessageRequest {
            message: FcmMessage {
                token,
                notification: FcmNotification {
                    title: &payload.title,
                    body: &payload.body,
                },
                data: &payload.data,
            },
        };

        let res = match self
            .client
            .post(&format!(
                "{}/projects/{}/messages:send",
                FCM_API_BASE_URL, self.project_id
            ))
            .header("authorization", format!("Bearer {}", access_token))
            .json(&body)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => {
                error!("[Network Error] FCM API send error. Error message: {:?}", e);
                return SendOutcome::Failed;
            }
        };

        if res.status().is_success() {
            return SendOutcome::Delivered;
        }

        match res.json::<ErrorResponse>().await {
            Ok(e) if INVALID_TOKEN_STATUSES.contains(&e.error.status.as_str()) => {
                SendOutcome::InvalidToken
            }
            Ok(e) => {
                error!(
                    "FCM API rejected the message. Status: {}. Error message: {}",
                    e.error.status, e.error.message
                );
                SendOutcome::Failed
            }
            Err(e) => {
                error!(
                    "[Unexpected Response] FCM API send error. Error message: {:?}",
                    e
                );
                SendOutcome::Failed
            }
        }
    }
}
