//! HTTP implementation of [`UserSource`].

use super::{SourceError, UserSource};
use crate::config::SourceConfig;
use crate::model::{avatar_url_for, Address, Company, User, UserId};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default endpoint serving the user list.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// A user object as the REST endpoint returns it.
///
/// Unknown fields (e.g. `address.geo`) are ignored and any avatar the
/// endpoint sends is discarded in favour of the derived one.
#[derive(Debug, Deserialize)]
struct RawUser {
    id: UserId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    website: String,
    #[serde(default)]
    address: Address,
    #[serde(default)]
    company: Company,
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            username: raw.username,
            email: raw.email,
            phone: raw.phone,
            website: raw.website,
            avatar_url: avatar_url_for(raw.id),
            address: raw.address,
            company: raw.company,
        }
    }
}

/// Fetches users with a single `GET` against a fixed endpoint.
pub struct HttpUserSource {
    client: Client,
    endpoint: String,
}

impl HttpUserSource {
    /// Builds a source from configuration.
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let mut builder =
            Client::builder().connect_timeout(Duration::from_secs(config.connect_timeout_seconds));
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Builds a source for `endpoint` with default timeouts.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, SourceError> {
        let config = SourceConfig {
            endpoint: endpoint.into(),
            ..SourceConfig::default()
        };
        Self::new(&config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_users(&self) -> Result<Vec<User>, SourceError> {
        debug!("Sending request");
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Endpoint refused user list");
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let raw: Vec<RawUser> =
            serde_json::from_slice(&body).map_err(|e| SourceError::Decode(e.to_string()))?;

        info!(count = raw.len(), "Fetched users");
        Ok(raw.into_iter().map(User::from).collect())
    }
}
