/// Base URL of the production REST API
pub const DEFAULT_BASE_URL: &str = "https://cloud.iexapis.com";
/// Base URL of the sandbox REST API, used when the version is `sandbox`
pub const DEFAULT_SANDBOX_URL: &str = "https://sandbox.iexapis.com";
/// Default API version when none is configured
pub const DEFAULT_VERSION: &str = "stable";
/// Version tag that routes requests to the sandbox host
pub const SANDBOX_VERSION: &str = "sandbox";
/// Version path segment used on the sandbox host
pub const SANDBOX_PATH_VERSION: &str = "stable";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Region used by international symbol lookups when neither region nor exchange is given
pub const DEFAULT_REGION: &str = "us";
/// Field selected by the list-conversion helpers
pub const SYMBOL_FIELD: &str = "symbol";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "iex-client/0.1.0";
