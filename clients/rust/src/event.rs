use crate::{APIResponse, BaseClient};
use dugout_api_structs::*;
use dugout_domain::{EventType, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CalendarEventClient {
    base: Arc<BaseClient>,
}

pub struct CreateEventInput {
    pub title: String,
    pub event_type: EventType,
    pub start_ts: i64,
    pub duration: i64,
    pub location: Option<String>,
}

pub struct UpdateEventInput {
    pub event_id: ID,
    pub title: Option<String>,
    pub event_type: Option<EventType>,
    pub start_ts: Option<i64>,
    pub duration: Option<i64>,
    pub location: Option<String>,
}

impl CalendarEventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            title: input.title,
            event_type: input.event_type,
            start_ts: input.start_ts,
            duration: input.duration,
            location: input.location,
        };

        self.base
            .post(body, "events".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        let event_id = input.event_id.clone();
        let body = update_event::RequestBody {
            title: input.title,
            event_type: input.event_type,
            start_ts: input.start_ts,
            duration: input.duration,
            location: input.location,
        };

        self.base
            .put(body, format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, event_id: ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events/{}", event_id), StatusCode::OK)
            .await
    }
}
