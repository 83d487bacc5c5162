mod inmemory;
mod postgres;

pub use inmemory::InMemoryDeviceTokenRepo;
pub use postgres::PostgresDeviceTokenRepo;

use crate::repos::shared::repo::DeleteResult;
use dugout_domain::{DeviceToken, ID};

#[async_trait::async_trait]
pub trait IDeviceTokenRepo: Send + Sync {
    /// Insert the registration or, when the `(user_id, token)` pair
    /// already exists, update its platform and active flag
    async fn upsert(&self, device_token: &DeviceToken) -> anyhow::Result<()>;
    async fn find_active_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<DeviceToken>>;
    async fn find_all_active(&self) -> anyhow::Result<Vec<DeviceToken>>;
    /// Flag tokens the push provider reported permanently invalid. The
    /// rows are kept so that a re-registering device reactivates them.
    async fn deactivate(&self, tokens: &[String]) -> anyhow::Result<()>;
    async fn delete(&self, user_id: &ID, token: &str) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod test {
    use crate::setup_context;
    use crate::DugoutContext;
    use dugout_domain::{DeviceToken, Platform, ID};

    async fn contexts() -> Vec<DugoutContext> {
        vec![DugoutContext::create_inmemory(), setup_context().await]
    }

    #[tokio::test]
    async fn upsert_registers_new_tokens() {
        for ctx in contexts().await {
            let user_id = ID::new();
            let token = DeviceToken::new(user_id.clone(), "token-1".into(), Platform::Ios);
            ctx.repos
                .device_tokens
                .upsert(&token)
                .await
                .expect("To register device token");

            let tokens = ctx
                .repos
                .device_tokens
                .find_active_by_user(&user_id)
                .await
                .unwrap();
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0], token);
        }
    }

    #[tokio::test]
    async fn upsert_updates_existing_registration() {
        for ctx in contexts().await {
            let user_id = ID::new();
            let mut token = DeviceToken::new(user_id.clone(), "token-1".into(), Platform::Ios);
            ctx.repos.device_tokens.upsert(&token).await.unwrap();
            ctx.repos
                .device_tokens
                .deactivate(&["token-1".to_string()])
                .await
                .unwrap();

            // Re-registering the same token reactivates it and may change
            // the platform
            token.platform = Platform::Android;
            ctx.repos.device_tokens.upsert(&token).await.unwrap();

            let tokens = ctx
                .repos
                .device_tokens
                .find_active_by_user(&user_id)
                .await
                .unwrap();
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].platform, Platform::Android);
            assert!(tokens[0].active);
        }
    }

    #[tokio::test]
    async fn deactivated_tokens_are_not_listed() {
        for ctx in contexts().await {
            let user_id = ID::new();
            for token in ["token-1", "token-2"].iter() {
                let t = DeviceToken::new(user_id.clone(), token.to_string(), Platform::Ios);
                ctx.repos.device_tokens.upsert(&t).await.unwrap();
            }

            ctx.repos
                .device_tokens
                .deactivate(&["token-2".to_string()])
                .await
                .expect("To deactivate token");
            // Deactivating twice is a no-op
            ctx.repos
                .device_tokens
                .deactivate(&["token-2".to_string()])
                .await
                .unwrap();

            let all_active = ctx.repos.device_tokens.find_all_active().await.unwrap();
            assert_eq!(all_active.len(), 1);
            assert_eq!(all_active[0].token, "token-1");
        }
    }

    #[tokio::test]
    async fn tokens_are_scoped_to_their_user() {
        for ctx in contexts().await {
            let user_id = ID::new();
            let other_user_id = ID::new();
            let token = DeviceToken::new(user_id.clone(), "token-1".into(), Platform::Web);
            let other_token =
                DeviceToken::new(other_user_id.clone(), "token-2".into(), Platform::Ios);
            ctx.repos.device_tokens.upsert(&token).await.unwrap();
            ctx.repos.device_tokens.upsert(&other_token).await.unwrap();

            let tokens = ctx
                .repos
                .device_tokens
                .find_active_by_user(&user_id)
                .await
                .unwrap();
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].token, "token-1");

            let all = ctx.repos.device_tokens.find_all_active().await.unwrap();
            assert_eq!(all.len(), 2);
        }
    }

    #[tokio::test]
    async fn delete_removes_the_registration() {
        for ctx in contexts().await {
            let user_id = ID::new();
            let token = DeviceToken::new(user_id.clone(), "token-1".into(), Platform::Ios);
            ctx.repos.device_tokens.upsert(&token).await.unwrap();

            let res = ctx
                .repos
                .device_tokens
                .delete(&user_id, "token-1")
                .await
                .expect("To delete device token");
            assert_eq!(res.deleted_count, 1);

            let res = ctx
                .repos
                .device_tokens
                .delete(&user_id, "token-1")
                .await
                .unwrap();
            assert_eq!(res.deleted_count, 0);

            let tokens = ctx
                .repos
                .device_tokens
                .find_active_by_user(&user_id)
                .await
                .unwrap();
            assert!(tokens.is_empty());
        }
    }
}
