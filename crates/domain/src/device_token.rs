use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
        };
        write!(f, "{}", repr)
    }
}

#[derive(Error, Debug)]
#[error("Invalid platform: {0}")]
pub struct InvalidPlatformError(pub String);

impl FromStr for Platform {
    type Err = InvalidPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "web" => Ok(Self::Web),
            _ => Err(InvalidPlatformError(s.to_string())),
        }
    }
}

/// A push token registered by one of a user's devices. Identified by the
/// `(user_id, token)` pair, there is no surrogate id. Tokens reported
/// permanently invalid by the push provider are deactivated, never deleted,
/// so that a device re-registering flips the same row back on.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceToken {
    pub user_id: ID,
    pub token: String,
    pub platform: Platform,
    pub active: bool,
}

impl DeviceToken {
    pub fn new(user_id: ID, token: String, platform: Platform) -> Self {
        Self {
            user_id,
            token,
            platform,
            active: true,
        }
    }
}
