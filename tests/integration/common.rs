// Common utilities for integration tests

use iex_client::prelude::*;

pub const TEST_TOKEN: &str = "test_token";

/// Creates a client pointed at a mock server
pub fn create_test_client(server_url: &str) -> Client {
    setup_logger();
    let config = Config::with_token(TEST_TOKEN).with_base_url(server_url);
    Client::new(config).expect("Failed to create client")
}

/// Request options pointed at a mock server
pub fn create_test_options(server_url: &str) -> RequestOptions {
    RequestOptions::new(TEST_TOKEN).with_base_url(server_url)
}
