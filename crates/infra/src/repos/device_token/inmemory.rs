use super::IDeviceTokenRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use dugout_domain::{DeviceToken, ID};
use std::sync::Mutex;

pub struct InMemoryDeviceTokenRepo {
    device_tokens: Mutex<Vec<DeviceToken>>,
}

impl InMemoryDeviceTokenRepo {
    pub fn new() -> Self {
        Self {
            device_tokens: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IDeviceTokenRepo for InMemoryDeviceTokenRepo {
    async fn upsert(&self, device_token: &DeviceToken) -> anyhow::Result<()> {
        let existing = find_by(&self.device_tokens, |t| {
            t.user_id == device_token.user_id && t.token == device_token.token
        });
        if existing.is_empty() {
            insert(device_token, &self.device_tokens);
        } else {
            update_many(
                &self.device_tokens,
                |t| t.user_id == device_token.user_id && t.token == device_token.token,
                |t| {
                    t.platform = device_token.platform;
                    t.active = device_token.active;
                },
            );
        }
        Ok(())
    }

    async fn find_active_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<DeviceToken>> {
        Ok(find_by(&self.device_tokens, |t| {
            t.user_id == *user_id && t.active
        }))
    }

    async fn find_all_active(&self) -> anyhow::Result<Vec<DeviceToken>> {
        Ok(find_by(&self.device_tokens, |t| t.active))
    }

    async fn deactivate(&self, tokens: &[String]) -> anyhow::Result<()> {
        update_many(
            &self.device_tokens,
            |t| tokens.contains(&t.token),
            |t| t.active = false,
        );
        Ok(())
    }

    async fn delete(&self, user_id: &ID, token: &str) -> anyhow::Result<DeleteResult> {
        let deleted = find_and_delete_by(&self.device_tokens, |t| {
            t.user_id == *user_id && t.token == token
        });
        Ok(DeleteResult {
            deleted_count: deleted.len() as i64,
        })
    }
}
