/// Client holding the configured token and version
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits implemented by the client
pub mod interfaces;
/// Endpoint functions taking explicit request options
pub mod services;
