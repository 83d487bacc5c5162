mod inmemory;
mod postgres;

pub use inmemory::InMemoryAnnouncementRepo;
pub use postgres::PostgresAnnouncementRepo;

use dugout_domain::{Announcement, ID};

#[async_trait::async_trait]
pub trait IAnnouncementRepo: Send + Sync {
    async fn insert(&self, announcement: &Announcement) -> anyhow::Result<()>;
    async fn find(&self, announcement_id: &ID) -> anyhow::Result<Option<Announcement>>;
    async fn delete(&self, announcement_id: &ID) -> anyhow::Result<Option<Announcement>>;
}

#[cfg(test)]
mod test {
    use crate::setup_context;
    use crate::DugoutContext;
    use dugout_domain::{Announcement, AnnouncementPriority, ID};

    fn default_announcement() -> Announcement {
        Announcement {
            id: Default::default(),
            title: "Practice moved".into(),
            content: "Practice is moved to Field 2 because of turf maintenance.".into(),
            priority: AnnouncementPriority::High,
            created: 0,
            updated: 0,
        }
    }

    async fn contexts() -> Vec<DugoutContext> {
        vec![DugoutContext::create_inmemory(), setup_context().await]
    }

    #[tokio::test]
    async fn create_and_delete() {
        for ctx in contexts().await {
            let announcement = default_announcement();

            assert!(ctx.repos.announcements.insert(&announcement).await.is_ok());

            let found = ctx
                .repos
                .announcements
                .find(&announcement.id)
                .await
                .unwrap()
                .expect("To find announcement");
            assert_eq!(found, announcement);

            let deleted = ctx
                .repos
                .announcements
                .delete(&announcement.id)
                .await
                .unwrap()
                .expect("To delete announcement");
            assert_eq!(deleted, announcement);

            assert!(ctx
                .repos
                .announcements
                .find(&announcement.id)
                .await
                .unwrap()
                .is_none());
        }
    }

    #[tokio::test]
    async fn stores_every_priority() {
        for ctx in contexts().await {
            for priority in [
                AnnouncementPriority::Normal,
                AnnouncementPriority::High,
                AnnouncementPriority::Urgent,
            ]
            .iter()
            {
                let mut announcement = default_announcement();
                announcement.id = ID::new();
                announcement.priority = *priority;
                ctx.repos.announcements.insert(&announcement).await.unwrap();

                let found = ctx
                    .repos
                    .announcements
                    .find(&announcement.id)
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(found.priority, *priority);
            }
        }
    }
}
