// ── Core error types ──
//
// User-facing errors from erpview-core. Consumers never see HTTP status
// codes or JSON parse failures directly. The `From<erpview_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.
//
// Only the service facade returns these; index, resolver and selection
// functions cannot fail.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {identifier}")]
    NotFound { identifier: String },

    #[error("Unexpected data from service: {message}")]
    Data { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Whether retrying the same request might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. } | Self::Timeout { .. } => true,
            Self::Api { status, .. } => status.is_some_and(|s| s == 429 || s >= 500),
            _ => false,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<erpview_api::Error> for CoreError {
    fn from(err: erpview_api::Error) -> Self {
        match err {
            erpview_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            erpview_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            erpview_api::Error::ClientBuild(msg) => CoreError::Config {
                message: format!("HTTP client: {msg}"),
            },
            erpview_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            erpview_api::Error::Http { status: 404, message } => CoreError::NotFound {
                identifier: message,
            },
            erpview_api::Error::Http { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            erpview_api::Error::Deserialization { message, body: _ } => {
                CoreError::Data { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_maps() {
        let not_found: CoreError = erpview_api::Error::Http {
            status: 404,
            message: "gone".into(),
        }
        .into();
        assert!(matches!(not_found, CoreError::NotFound { .. }));

        let unavailable: CoreError = erpview_api::Error::Http {
            status: 503,
            message: "later".into(),
        }
        .into();
        assert!(unavailable.is_transient());
    }

    #[test]
    fn deserialization_maps_to_data() {
        let err: CoreError = erpview_api::Error::Deserialization {
            message: "expected array".into(),
            body: "{}".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Data { .. }));
        assert!(!err.is_transient());
    }
}
