use dugout_api::Application;
use dugout_infra::{setup_context, Config, DugoutContext};
use dugout_sdk::DugoutSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, DugoutSDK, String) {
    spawn_app_with_context(setup_context().await).await
}

/// Like `spawn_app`, but for tests that need to prepare the context
/// first, e.g. to inject a push gateway test double or flip the
/// environment to production
pub async fn spawn_app_with_context(mut ctx: DugoutContext) -> (TestApp, DugoutSDK, String) {
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = DugoutSDK::new(address.clone(), "");
    (app, sdk, address)
}
