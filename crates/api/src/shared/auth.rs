use crate::error::DugoutError;
use actix_web::HttpRequest;
use dugout_infra::{DugoutContext, Environment};

/// Guards the cron endpoints. In production the `x-cron-secret` header
/// must match the configured secret. In development the check is skipped
/// so that local runs do not need the secret wired up.
pub fn protect_cron_route(req: &HttpRequest, ctx: &DugoutContext) -> Result<(), DugoutError> {
    if ctx.config.environment != Environment::Production {
        return Ok(());
    }

    let secret = match req.headers().get("x-cron-secret") {
        Some(secret) => match secret.to_str() {
            Ok(secret) => secret,
            Err(_) => {
                return Err(DugoutError::Unauthorized(
                    "Malformed cron secret provided".to_string(),
                ))
            }
        },
        None => {
            return Err(DugoutError::Unauthorized(
                "Unable to find cron secret in x-cron-secret header".to_string(),
            ))
        }
    };

    if secret != ctx.config.cron_secret {
        return Err(DugoutError::Unauthorized(
            "Invalid cron secret provided in x-cron-secret header".to_string(),
        ));
    }

    Ok(())
}
