use crate::config::FirebaseSettings;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

// https://developers.google.com/identity/protocols/oauth2/service-account#httprest

const TOKEN_EXCHANGE_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const FIREBASE_MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
    token_type: String,
    // Access token expires in specified in seconds
    expires_in: i64,
}

struct CachedToken {
    access_token: String,
    expires_ts: i64,
}

/// Mints OAuth2 access tokens for the service account by exchanging a
/// signed JWT assertion, and caches them until close to expiry
pub struct AuthProvider {
    settings: FirebaseSettings,
    cached_token: Mutex<Option<CachedToken>>,
}

impl AuthProvider {
    pub fn new(settings: FirebaseSettings) -> Self {
        Self {
            settings,
            cached_token: Mutex::new(None),
        }
    }

    pub async fn get_access_token(&self) -> anyhow::Result<String> {
        let now = Utc::now().timestamp_millis();
        let one_minute_in_millis = 1000 * 60;
        {
            let cached = self.cached_token.lock().unwrap();
            if let Some(token) = cached.as_ref() {
                if now + one_minute_in_millis <= token.expires_ts {
                    // Current access token is still valid for at least one minute so return it
                    return Ok(token.access_token.clone());
                }
            }
        }
        // Access token has or will expire soon, now mint a new one

        let res = self.exchange_signed_claims().await?;
        let access_token = res.access_token.clone();
        let expires_in_millis = res.expires_in * 1000;

        let mut cached = self.cached_token.lock().unwrap();
        *cached = Some(CachedToken {
            access_token: res.access_token,
            expires_ts: now + expires_in_millis,
        });

        Ok(access_token)
    }

    async fn exchange_signed_claims(&self) -> anyhow::Result<AccessTokenResponse> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            iss: &self.settings.client_email,
            scope: FIREBASE_MESSAGING_SCOPE,
            aud: TOKEN_EXCHANGE_ENDPOINT,
            iat,
            exp: iat + 3600,
        };
        let key = EncodingKey::from_rsa_pem(self.settings.private_key.as_bytes())?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)?;

        let params = [
            ("grant_type", JWT_BEARER_GRANT_TYPE),
            ("assertion", assertion.as_str()),
        ];
        let client = reqwest::Client::new();
        let res = client
            .post(TOKEN_EXCHANGE_ENDPOINT)
            .form(&params)
            .send()
            .await?;

        Ok(res.json::<AccessTokenResponse>().await?)
    }
}
