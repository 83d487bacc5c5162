use crate::error::DugoutError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::remove_device_token::*;
use dugout_domain::ID;
use dugout_infra::DugoutContext;

pub async fn remove_device_token_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let body = body.0;
    let usecase = RemoveDeviceTokenUseCase {
        user_id: body.user_id,
        token: body.token,
    };

    execute(usecase, &ctx)
        .await
        .map(|deleted_count| HttpResponse::Ok().json(APIResponse { deleted_count }))
        .map_err(DugoutError::from)
}

/// Used on sign out. Removing a token that was never registered is fine,
/// the response just reports zero deleted rows.
#[derive(Debug)]
pub struct RemoveDeviceTokenUseCase {
    pub user_id: ID,
    pub token: String,
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
impl UseCase for RemoveDeviceTokenUseCase {
    type Response = i64;

    type Error = UseCaseError;

    const NAME: &'static str = "RemoveDeviceToken";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        let res = ctx
            .repos
            .device_tokens
            .delete(&self.user_id, &self.token)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(res.deleted_count)
    }
}
