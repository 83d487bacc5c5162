use super::subscribers::QueuePushOnAnnouncementCreated;
use crate::error::DugoutError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::create_announcement::*;
use dugout_domain::{Announcement, AnnouncementPriority};
use dugout_infra::DugoutContext;

pub async fn create_announcement_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let body = body.0;
    let usecase = CreateAnnouncementUseCase {
        title: body.title,
        content: body.content,
        priority: body.priority.unwrap_or(AnnouncementPriority::Normal),
    };

    execute(usecase, &ctx)
        .await
        .map(|announcement| HttpResponse::Created().json(APIResponse::new(announcement)))
        .map_err(DugoutError::from)
}

#[derive(Debug)]
pub struct CreateAnnouncementUseCase {
    pub title: String,
    pub content: String,
    pub priority: AnnouncementPriority,
}

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
impl UseCase for CreateAnnouncementUseCase {
    type Response = Announcement;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateAnnouncement";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let announcement = Announcement {
            id: Default::default(),
            title: self.title.clone(),
            content: self.content.clone(),
            priority: self.priority,
            created: now,
            updated: now,
        };

        ctx.repos
            .announcements
            .insert(&announcement)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(announcement)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(QueuePushOnAnnouncementCreated)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dugout_domain::NotificationKind;

    async fn create(ctx: &DugoutContext, priority: AnnouncementPriority) -> Announcement {
        let usecase = CreateAnnouncementUseCase {
            title: "Rainout".into(),
            content: "Practice is cancelled today.".into(),
            priority,
        };
        execute(usecase, ctx).await.expect("To create announcement")
    }

    #[actix_web::main]
    #[test]
    async fn creates_announcement() {
        let ctx = DugoutContext::create_inmemory();

        let announcement = create(&ctx, AnnouncementPriority::Normal).await;
        let stored = ctx
            .repos
            .announcements
            .find(&announcement.id)
            .await
            .unwrap()
            .expect("Announcement to be stored");
        assert_eq!(stored.title, "Rainout");
        assert_eq!(stored.priority, AnnouncementPriority::Normal);
    }

    #[actix_web::main]
    #[test]
    async fn queues_a_due_push_for_urgent_announcements() {
        let ctx = DugoutContext::create_inmemory();

        let announcement = create(&ctx, AnnouncementPriority::Urgent).await;

        let due = ctx
            .repos
            .scheduled_notifications
            .find_due(ctx.sys.get_timestamp_millis(), 10)
            .await
            .unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, NotificationKind::Announcement);
        assert_eq!(due[0].reference_id, announcement.id);
    }

    #[actix_web::main]
    #[test]
    async fn does_not_queue_a_push_for_normal_announcements() {
        let ctx = DugoutContext::create_inmemory();

        create(&ctx, AnnouncementPriority::Normal).await;

        let due = ctx
            .repos
            .scheduled_notifications
            .find_due(ctx.sys.get_timestamp_millis(), 10)
            .await
            .unwrap();
        assert!(due.is_empty());
    }
}
