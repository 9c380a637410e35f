// Rate service endpoints
//
// Both endpoints return bare JSON arrays; there is no envelope to strip.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::client::HttpClient;
use crate::error::Error;
use crate::models::RawTollRecord;
use crate::transport::TransportConfig;

/// Client for the toll-rate service.
pub struct RatesClient {
    inner: HttpClient,
}

impl RatesClient {
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

    /// List every toll record, in service order.
    ///
    /// `GET /erp`
    pub async fn list_rates(&self) -> Result<Vec<RawTollRecord>, Error> {
        let url = self.inner.endpoint("erp")?;
        debug!("listing toll records");
        self.inner.get(url).await
    }

    /// List the time-window catalogue (`"<start> to <end>"` strings).
    ///
    /// `GET /erp_time`
    pub async fn list_time_windows(&self) -> Result<Vec<String>, Error> {
        let url = self.inner.endpoint("erp_time")?;
        debug!("listing time windows");
        self.inner.get(url).await
    }
}
