use dugout_domain::{Announcement, AnnouncementPriority, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDTO {
    pub id: ID,
    pub title: String,
    pub content: String,
    pub priority: AnnouncementPriority,
    pub created: i64,
    pub updated: i64,
}

impl AnnouncementDTO {
    pub fn new(announcement: Announcement) -> Self {
        Self {
            id: announcement.id.clone(),
            title: announcement.title,
            content: announcement.content,
            priority: announcement.priority,
            created: announcement.created,
            updated: announcement.updated,
        }
    }
}
