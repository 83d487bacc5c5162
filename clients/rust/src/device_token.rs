use crate::{APIResponse, BaseClient};
use dugout_api_structs::*;
use dugout_domain::{Platform, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct DeviceTokenClient {
    base: Arc<BaseClient>,
}

pub struct RegisterDeviceTokenInput {
    pub user_id: ID,
    pub token: String,
    pub platform: Platform,
}

pub struct RemoveDeviceTokenInput {
    pub user_id: ID,
    pub token: String,
}

impl DeviceTokenClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn register(
        &self,
        input: RegisterDeviceTokenInput,
    ) -> APIResponse<register_device_token::APIResponse> {
        let body = register_device_token::RequestBody {
            user_id: input.user_id,
            token: input.token,
            platform: input.platform,
        };

        self.base
            .post(body, "device_tokens".into(), StatusCode::OK)
            .await
    }

    pub async fn remove(
        &self,
        input: RemoveDeviceTokenInput,
    ) -> APIResponse<remove_device_token::APIResponse> {
        let body = remove_device_token::RequestBody {
            user_id: input.user_id,
            token: input.token,
        };

        self.base
            .delete_with_body(body, "device_tokens".into(), StatusCode::OK)
            .await
    }
}
