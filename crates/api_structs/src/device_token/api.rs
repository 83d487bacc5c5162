use crate::dtos::DeviceTokenDTO;
use dugout_domain::{DeviceToken, Platform, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTokenResponse {
    pub device_token: DeviceTokenDTO,
}

impl DeviceTokenResponse {
    pub fn new(device_token: DeviceToken) -> Self {
        Self {
            device_token: DeviceTokenDTO::new(device_token),
        }
    }
}

pub mod register_device_token {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: ID,
        pub token: String,
        pub platform: Platform,
    }

    pub type APIResponse = DeviceTokenResponse;
}

pub mod remove_device_token {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: ID,
        pub token: String,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub deleted_count: i64,
    }
}
