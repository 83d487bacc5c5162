use crate::dtos::AnnouncementDTO;
use dugout_domain::{Announcement, AnnouncementPriority, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementResponse {
    pub announcement: AnnouncementDTO,
}

impl AnnouncementResponse {
    pub fn new(announcement: Announcement) -> Self {
        Self {
            announcement: AnnouncementDTO::new(announcement),
        }
    }
}

pub mod create_announcement {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub content: String,
        pub priority: Option<AnnouncementPriority>,
    }

    pub type APIResponse = AnnouncementResponse;
}

pub mod get_announcement {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub announcement_id: ID,
    }

    pub type APIResponse = AnnouncementResponse;
}

pub mod delete_announcement {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub announcement_id: ID,
    }

    pub type APIResponse = AnnouncementResponse;
}
