use dugout_domain::{DeviceToken, Platform, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTokenDTO {
    pub user_id: ID,
    pub token: String,
    pub platform: Platform,
    pub active: bool,
}

impl DeviceTokenDTO {
    pub fn new(device_token: DeviceToken) -> Self {
        Self {
            user_id: device_token.user_id.clone(),
            token: device_token.token,
            platform: device_token.platform,
            active: device_token.active,
        }
    }
}
