use crate::{APIResponse, BaseClient};
use dugout_api_structs::*;
use dugout_domain::{AnnouncementPriority, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AnnouncementClient {
    base: Arc<BaseClient>,
}

pub struct CreateAnnouncementInput {
    pub title: String,
    pub content: String,
    pub priority: Option<AnnouncementPriority>,
}

impl AnnouncementClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateAnnouncementInput,
    ) -> APIResponse<create_announcement::APIResponse> {
        let body = create_announcement::RequestBody {
            title: input.title,
            content: input.content,
            priority: input.priority,
        };

        self.base
            .post(body, "announcements".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, announcement_id: ID) -> APIResponse<get_announcement::APIResponse> {
        self.base
            .get(format!("announcements/{}", announcement_id), StatusCode::OK)
            .await
    }

    pub async fn delete(
        &self,
        announcement_id: ID,
    ) -> APIResponse<delete_announcement::APIResponse> {
        self.base
            .delete(format!("announcements/{}", announcement_id), StatusCode::OK)
            .await
    }
}
