use super::subscribers::CancelPendingPushOnAnnouncementDeleted;
use crate::error::DugoutError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::delete_announcement::*;
use dugout_domain::{Announcement, ID};
use dugout_infra::DugoutContext;

pub async fn delete_announcement_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let usecase = DeleteAnnouncementUseCase {
        announcement_id: path_params.announcement_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|announcement| HttpResponse::Ok().json(APIResponse::new(announcement)))
        .map_err(DugoutError::from)
}

#[derive(Debug)]
pub struct DeleteAnnouncementUseCase {
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
impl UseCase for DeleteAnnouncementUseCase {
    type Response = Announcement;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteAnnouncement";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.announcements.delete(&self.announcement_id).await {
            Ok(Some(announcement)) => Ok(announcement),
            Ok(None) => Err(UseCaseError::NotFound(self.announcement_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CancelPendingPushOnAnnouncementDeleted)]
    }
}
