use pipedrive_api::PipedriveRestClient;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Build a client for integration tests.
///
/// Panics with a helpful message if `PIPEDRIVE_API_TOKEN` is not set. Tests
/// should fail, not skip, when they are run without credentials.
pub fn get_client() -> PipedriveRestClient {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });

    match std::env::var("PIPEDRIVE_API_TOKEN") {
        Ok(token) if !token.is_empty() => {}
        _ => panic!(
            "\n\nPIPEDRIVE_API_TOKEN is not set.\n\
             Integration tests run against a real Pipedrive company.\n\
             Export a token (Settings > Personal preferences > API) and retry.\n"
        ),
    }

    PipedriveRestClient::from_env().expect("Failed to create Pipedrive client")
}

/// A unique name so parallel runs do not collide.
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix} {}", chrono::Utc::now().timestamp_millis())
}
