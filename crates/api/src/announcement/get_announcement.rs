use crate::error::DugoutError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::get_announcement::*;
use dugout_domain::{Announcement, ID};
use dugout_infra::DugoutContext;

pub async fn get_announcement_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let usecase = GetAnnouncementUseCase {
        announcement_id: path_params.announcement_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|announcement| HttpResponse::Ok().json(APIResponse::new(announcement)))
        .map_err(DugoutError::from)
}

#[derive(Debug)]
pub struct GetAnnouncementUseCase {
    pub announcement_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for DugoutError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(announcement_id) => DugoutError::NotFound(format!(
                "The announcement with id: {}, was not found.",
                announcement_id
            )),
            UseCaseError::StorageError => DugoutError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAnnouncementUseCase {
    type Response = Announcement;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAnnouncement";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.announcements.find(&self.announcement_id).await {
            Ok(Some(announcement)) => Ok(announcement),
            Ok(None) => Err(UseCaseError::NotFound(self.announcement_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dugout_domain::AnnouncementPriority;

    #[actix_web::main]
    #[test]
    async fn finds_existing_announcement() {
        let ctx = DugoutContext::create_inmemory();
        let announcement = Announcement {
            id: Default::default(),
            title: "Rainout".into(),
            content: "Practice is cancelled today.".into(),
            priority: AnnouncementPriority::Normal,
            created: 0,
            updated: 0,
        };
        ctx.repos
            .announcements
            .insert(&announcement)
            .await
            .unwrap();

        let mut usecase = GetAnnouncementUseCase {
            announcement_id: announcement.id.clone(),
        };
        let res = usecase.execute(&ctx).await;
        assert!(res.is_ok());
        assert_eq!(res.unwrap().id, announcement.id);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_announcement() {
        let ctx = DugoutContext::create_inmemory();

        let mut usecase = GetAnnouncementUseCase {
            announcement_id: Default::default(),
        };
        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }
}
