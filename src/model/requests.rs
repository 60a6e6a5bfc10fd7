/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_SANDBOX_URL, DEFAULT_VERSION, SANDBOX_PATH_VERSION, SANDBOX_VERSION,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbol argument: either one ticker or an ordered list of tickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymbolArg {
    /// A single ticker, possibly empty meaning "no symbol"
    One(String),
    /// An ordered sequence of tickers
    Many(Vec<String>),
}

impl SymbolArg {
    /// True when the argument carries no symbol at all, blanks included
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            SymbolArg::One(s) => s.trim().is_empty(),
            SymbolArg::Many(v) => v.iter().all(|s| s.trim().is_empty()),
        }
    }
}

impl Default for SymbolArg {
    fn default() -> Self {
        SymbolArg::One(String::new())
    }
}

impl From<&str> for SymbolArg {
    fn from(value: &str) -> Self {
        SymbolArg::One(value.to_string())
    }
}

impl From<String> for SymbolArg {
    fn from(value: String) -> Self {
        SymbolArg::One(value)
    }
}

impl From<&String> for SymbolArg {
    fn from(value: &String) -> Self {
        SymbolArg::One(value.clone())
    }
}

impl From<Vec<String>> for SymbolArg {
    fn from(value: Vec<String>) -> Self {
        SymbolArg::Many(value)
    }
}

impl From<Vec<&str>> for SymbolArg {
    fn from(value: Vec<&str>) -> Self {
        SymbolArg::Many(value.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for SymbolArg {
    fn from(value: &[&str]) -> Self {
        SymbolArg::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for SymbolArg {
    fn from(value: &[String]) -> Self {
        SymbolArg::Many(value.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for SymbolArg {
    fn from(value: [&str; N]) -> Self {
        SymbolArg::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<SymbolArg>> From<Option<T>> for SymbolArg {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// A date argument, either already formatted as text or a calendar value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateArg {
    /// Textual date, validated before use
    Str(String),
    /// Calendar date
    Date(NaiveDate),
    /// Date and time; only the date part is used
    DateTime(NaiveDateTime),
}

impl From<&str> for DateArg {
    fn from(value: &str) -> Self {
        DateArg::Str(value.to_string())
    }
}

impl From<String> for DateArg {
    fn from(value: String) -> Self {
        DateArg::Str(value)
    }
}

impl From<NaiveDate> for DateArg {
    fn from(value: NaiveDate) -> Self {
        DateArg::Date(value)
    }
}

impl From<NaiveDateTime> for DateArg {
    fn from(value: NaiveDateTime) -> Self {
        DateArg::DateTime(value)
    }
}

/// Credentials and request settings passed explicitly to every endpoint function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Access token
    pub token: String,
    /// API version path segment
    pub version: String,
    /// Optional server-side field selection
    pub filter: Option<String>,
    /// Production host
    pub base_url: String,
    /// Sandbox host, used when `version` is `sandbox`
    pub sandbox_url: String,
}

impl RequestOptions {
    /// Options with the given token, the default version and the production hosts
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            version: DEFAULT_VERSION.to_string(),
            filter: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            sandbox_url: DEFAULT_SANDBOX_URL.to_string(),
        }
    }

    /// Set the API version; an empty version falls back to the default
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = if version.is_empty() {
            DEFAULT_VERSION.to_string()
        } else {
            version
        };
        self
    }

    /// Set the filter
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set or clear the filter
    pub fn with_filter_opt(mut self, filter: Option<&str>) -> Self {
        self.filter = filter.filter(|f| !f.is_empty()).map(String::from);
        self
    }

    /// Set the production host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the sandbox host
    pub fn with_sandbox_url(mut self, sandbox_url: impl Into<String>) -> Self {
        self.sandbox_url = sandbox_url.into();
        self
    }

    /// Scheme, host and version segment every URL starts with
    #[must_use]
    pub fn url_prefix(&self) -> String {
        if self.version == SANDBOX_VERSION {
            format!(
                "{}/{}",
                self.sandbox_url.trim_end_matches('/'),
                SANDBOX_PATH_VERSION
            )
        } else {
            format!("{}/{}", self.base_url.trim_end_matches('/'), self.version)
        }
    }
}

/// One outbound request, built per call and dropped once the call completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// `<host>/<version>` the path is appended to
    pub url_prefix: String,
    /// Relative path, possibly with its own query string
    pub path: String,
    /// Access token
    pub token: String,
    /// API version the prefix was derived from
    pub version: String,
    /// Optional server-side field selection
    pub filter: Option<String>,
}

impl RequestDescriptor {
    /// Builds a descriptor for `path` from the caller's options
    pub fn new(path: impl Into<String>, options: &RequestOptions) -> Self {
        Self {
            url_prefix: options.url_prefix(),
            path: path.into(),
            token: options.token.clone(),
            version: options.version.clone(),
            filter: options.filter.clone(),
        }
    }

    /// Same request with the filter removed, for batch forms that ignore it
    #[must_use]
    pub fn without_filter(mut self) -> Self {
        self.filter = None;
        self
    }

    /// Absolute URL: `<prefix>/<path>?token=<token>[&filter=<filter>]`
    #[must_use]
    pub fn url(&self) -> String {
        self.render(false)
    }

    /// URL with the token masked, safe to log
    #[must_use]
    pub fn redacted_url(&self) -> String {
        self.render(true)
    }

    fn render(&self, redact: bool) -> String {
        let token = if redact {
            "***".to_string()
        } else {
            urlencoding::encode(&self.token).into_owned()
        };
        let path = self.path.trim_start_matches('/');
        let separator = if path.contains('?') { '&' } else { '?' };
        let mut url = format!("{}/{}{}token={}", self.url_prefix, path, separator, token);
        if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            url.push_str("&filter=");
            url.push_str(&encode_csv(filter.split(',')));
        }
        url
    }
}

/// Percent-encodes each item and joins them with a literal comma
pub(crate) fn encode_csv<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| urlencoding::encode(item.as_ref().trim()).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted_url())
    }
}
