use crate::error::DugoutError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::register_device_token::*;
use dugout_domain::{DeviceToken, Platform, ID};
use dugout_infra::DugoutContext;

pub async fn register_device_token_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let body = body.0;
    let usecase = RegisterDeviceTokenUseCase {
        user_id: body.user_id,
        token: body.token,
        platform: body.platform,
    };

    execute(usecase, &ctx)
        .await
        .map(|device_token| HttpResponse::Ok().json(APIResponse::new(device_token)))
        .map_err(DugoutError::from)
}

/// Registering the same `(user_id, token)` pair again is an update, not
/// an error, so the app can re-register on every startup. A token that
/// was deactivated earlier becomes active again.
#[derive(Debug)]
pub struct RegisterDeviceTokenUseCase {
    pub user_id: ID,
    pub token: String,
    pub platform: Platform,
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
impl UseCase for RegisterDeviceTokenUseCase {
    type Response = DeviceToken;

    type Error = UseCaseError;

    const NAME: &'static str = "RegisterDeviceToken";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        let device_token =
            DeviceToken::new(self.user_id.clone(), self.token.clone(), self.platform);

        ctx.repos
            .device_tokens
            .upsert(&device_token)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(device_token)
    }
}
