// ── Runtime service configuration ──
//
// Describes *where* the upstream services live and how long to wait for
// them. Never touches disk: the CLI builds a `ServiceConfig` from its
// config file and flags and hands it in.

use std::time::Duration;

use url::Url;

/// Default base URL of the toll-rate service.
pub const DEFAULT_RATES_URL: &str = "https://traffooze-flask.onrender.com";

/// Default base URL of the saved-address service.
pub const DEFAULT_ADDRESS_URL: &str = "https://traffoozebackend.vercel.app";

/// Configuration for reaching the upstream services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL serving `/erp` and `/erp_time`.
    pub rates_url: Url,
    /// Base URL serving `/get-address/`.
    pub address_url: Url,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            rates_url: Url::parse(DEFAULT_RATES_URL).expect("default rates URL is valid"),
            address_url: Url::parse(DEFAULT_ADDRESS_URL).expect("default address URL is valid"),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_services() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.rates_url.host_str(), Some("traffooze-flask.onrender.com"));
        assert_eq!(cfg.address_url.host_str(), Some("traffoozebackend.vercel.app"));
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }
}
