// Favorite-address service endpoint

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::client::HttpClient;
use crate::error::Error;
use crate::models::{AddressRequest, AddressResponse};
use crate::transport::TransportConfig;

/// Client for the user-address service.
pub struct AddressClient {
    inner: HttpClient,
}

impl AddressClient {
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            inner: HttpClient::new(base_url, transport)?,
        })
    }

    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            inner: HttpClient::with_client(http, base_url),
        }
    }

    /// Timeout to report for a client built with `with_client`.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            inner: self.inner.with_timeout(timeout),
        }
    }

    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Fetch the saved home and work addresses for a user.
    ///
    /// `POST /get-address/` with `{"username": "..."}`
    pub async fn get_address(&self, username: &str) -> Result<AddressResponse, Error> {
        let url = self.inner.endpoint("get-address/")?;
        debug!(username, "fetching saved addresses");
        self.inner
            .post(
                url,
                &AddressRequest {
                    username: username.to_owned(),
                },
            )
            .await
    }
}
