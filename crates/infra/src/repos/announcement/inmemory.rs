use super::IAnnouncementRepo;
use crate::repos::shared::inmemory_repo::*;
use dugout_domain::{Announcement, ID};
use std::sync::Mutex;

pub struct InMemoryAnnouncementRepo {
    announcements: Mutex<Vec<Announcement>>,
}

impl InMemoryAnnouncementRepo {
    pub fn new() -> Self {
        Self {
            announcements: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAnnouncementRepo for InMemoryAnnouncementRepo {
    async fn insert(&self, announcement: &Announcement) -> anyhow::Result<()> {
        insert(announcement, &self.announcements);
        Ok(())
    }

    async fn find(&self, announcement_id: &ID) -> anyhow::Result<Option<Announcement>> {
        Ok(find(announcement_id, &self.announcements))
    }

    async fn delete(&self, announcement_id: &ID) -> anyhow::Result<Option<Announcement>> {
        Ok(delete(announcement_id, &self.announcements))
    }
}
