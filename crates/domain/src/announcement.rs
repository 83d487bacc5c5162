use crate::notification::NotificationPayload;
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Push notifications are only queued for `High` and `Urgent`
/// announcements, `Normal` ones just show up in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementPriority {
    Normal,
    High,
    Urgent,
}

impl AnnouncementPriority {
    pub fn requires_push(&self) -> bool {
        matches!(self, Self::High | Self::Urgent)
    }
}

impl Display for AnnouncementPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        };
        write!(f, "{}", repr)
    }
}

#[derive(Error, Debug)]
#[error("Invalid announcement priority: {0}")]
pub struct InvalidAnnouncementPriorityError(pub String);

impl FromStr for AnnouncementPriority {
    type Err = InvalidAnnouncementPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(InvalidAnnouncementPriorityError(s.to_string())),
        }
    }
}

/// Maximum number of characters of announcement content that fits in a
/// push notification body before it gets truncated
const PUSH_BODY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: ID,
    pub title: String,
    pub content: String,
    pub priority: AnnouncementPriority,
    pub created: i64,
    pub updated: i64,
}

impl Entity for Announcement {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Announcement {
    pub fn push_payload(&self) -> NotificationPayload {
        let title = match self.priority {
            AnnouncementPriority::Urgent => format!("🚨 {}", self.title),
            AnnouncementPriority::High => format!("⚠️ {}", self.title),
            AnnouncementPriority::Normal => self.title.clone(),
        };

        let body = if self.content.chars().count() > PUSH_BODY_LIMIT {
            let truncated = self.content.chars().take(PUSH_BODY_LIMIT).collect::<String>();
            format!("{}...", truncated)
        } else {
            self.content.clone()
        };

        let mut data = HashMap::new();
        data.insert("type".to_string(), "announcement".to_string());
        data.insert("announcementId".to_string(), self.id.as_string());

        NotificationPayload { title, body, data }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn announcement(priority: AnnouncementPriority, content: &str) -> Announcement {
        Announcement {
            id: Default::default(),
            title: "Practice moved".into(),
            content: content.into(),
            priority,
            created: 0,
            updated: 0,
        }
    }

    #[test]
    fn urgent_title_gets_siren_prefix() {
        let payload = announcement(AnnouncementPriority::Urgent, "Rainout").push_payload();
        assert_eq!(payload.title, "🚨 Practice moved");
    }

    #[test]
    fn high_title_gets_warning_prefix() {
        let payload = announcement(AnnouncementPriority::High, "Rainout").push_payload();
        assert_eq!(payload.title, "⚠️ Practice moved");
    }

    #[test]
    fn normal_title_is_unchanged() {
        let payload = announcement(AnnouncementPriority::Normal, "Rainout").push_payload();
        assert_eq!(payload.title, "Practice moved");
        assert_eq!(payload.data.get("type").unwrap(), "announcement");
    }

    #[test]
    fn short_content_is_not_truncated() {
        let payload = announcement(AnnouncementPriority::Normal, "Bring water").push_payload();
        assert_eq!(payload.body, "Bring water");
    }

    #[test]
    fn long_content_is_truncated_to_100_chars() {
        let content = "a".repeat(150);
        let payload = announcement(AnnouncementPriority::Normal, &content).push_payload();
        assert_eq!(payload.body, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // 101 multibyte characters should truncate cleanly at 100
        let content = "æ".repeat(101);
        let payload = announcement(AnnouncementPriority::Normal, &content).push_payload();
        assert_eq!(payload.body, format!("{}...", "æ".repeat(100)));
    }

    #[test]
    fn only_high_and_urgent_require_push() {
        assert!(!AnnouncementPriority::Normal.requires_push());
        assert!(AnnouncementPriority::High.requires_push());
        assert!(AnnouncementPriority::Urgent.requires_push());
    }
}
