//! Common test utilities and helpers

use std::path::Path;
use std::sync::Once;

use previder::Client;
use wiremock::MockServer;

/// A sub-customer id of the exact accepted length
#[allow(dead_code)]
pub const CUSTOMER_ID: &str = "5d6f7a8b9c0d1e2f3a4b5c6d";

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Create a test access token
#[allow(dead_code)]
pub fn test_token() -> String {
    "test-token-3f1c9a0b7e2d4c68".to_string()
}

/// Route `tracing` output to the test harness, once per binary.
#[allow(dead_code)]
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("previder=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Client pointed at the mock server, without tenant scoping
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> Client {
    init_tracing();
    Client::builder()
        .auth_token(test_token())
        .base_url(server.uri())
        .build()
        .expect("Failed to build client")
}
