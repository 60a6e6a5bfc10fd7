/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # IEX Client Prelude
//!
//! Brings the client, its configuration, the service traits and the
//! argument types into scope with a single import.
//!
//! ```rust
//! use iex_client::prelude::*;
//!
//! let config = Config::with_token("pk_test");
//! let options = config.request_options().with_filter("symbol");
//! assert_eq!(options.version, "stable");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::application::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, IexResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Configured client
pub use crate::application::client::Client;

/// Service traits implemented by the client
pub use crate::application::interfaces::deep::DeepService;
pub use crate::application::interfaces::stats::StatsService;
pub use crate::application::interfaces::symbols::SymbolsService;
pub use crate::application::interfaces::tops::TopsService;

// ============================================================================
// REQUESTS, RESPONSES AND TRANSPORT
// ============================================================================

/// Transport abstraction and the request core
pub use crate::model::http::{HttpClient, Transport, TransportResponse, get_json};

/// Request arguments
pub use crate::model::requests::{DateArg, RequestDescriptor, RequestOptions, SymbolArg};

/// Response projections
pub use crate::model::responses::FxSymbolsList;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Argument helpers
pub use crate::utils::validation::{raise_if_not_str, str_or_date, str_to_list};
