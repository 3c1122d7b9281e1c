use crate::source::DEFAULT_ENDPOINT;
use crate::view::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Root configuration container. Every section and field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Where and how the user list is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL answering `GET` with a JSON array of users.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Whole-request timeout in seconds. Unset means wait forever.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Store actor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Capacity of the request channel (default: 32).
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

/// List view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rows per table page (default: 5).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_buffer_size() -> usize {
    32
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}
