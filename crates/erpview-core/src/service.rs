// ── Rate service facade ──
//
// Wraps the rate and address clients behind domain types. Fetch failures
// are logged and degrade to empty data; only the `try_*` and `fetch_*`
// methods surface a `CoreError`.

use futures_util::StreamExt;
use futures_util::stream;
use tracing::{info, warn};

use erpview_api::{AddressClient, RatesClient, TransportConfig};

use crate::board::RateBoard;
use crate::config::ServiceConfig;
use crate::convert::{favorites_from_response, records_from_raw};
use crate::error::CoreError;
use crate::model::{FavoriteLocation, TollRecord};
use crate::selection::KeyMode;

/// One completed fetch during a board load.
enum Loaded {
    Records(Result<Vec<TollRecord>, CoreError>),
    Windows(Result<Vec<String>, CoreError>),
}

/// Entry point for everything that talks to the upstream services.
pub struct RateService {
    rates: RatesClient,
    addresses: AddressClient,
}

impl RateService {
    pub fn new(config: &ServiceConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::with_timeout(config.timeout);
        let http = transport.build_client()?;
        Ok(Self::from_clients(
            RatesClient::with_client(http.clone(), config.rates_url.clone())
                .with_timeout(config.timeout),
            AddressClient::with_client(http, config.address_url.clone())
                .with_timeout(config.timeout),
        ))
    }

    pub fn from_clients(rates: RatesClient, addresses: AddressClient) -> Self {
        Self { rates, addresses }
    }

    // ── Rates ────────────────────────────────────────────────────────

    /// Fetch and convert the toll record list. Unusable records are dropped.
    pub async fn fetch_records(&self) -> Result<Vec<TollRecord>, CoreError> {
        let raw = self.rates.list_rates().await?;
        Ok(records_from_raw(raw))
    }

    pub async fn fetch_time_windows(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.rates.list_time_windows().await?)
    }

    /// Load a fresh board, fetching records and time windows concurrently.
    ///
    /// Each response is applied as it arrives, so the board is rebuilt once
    /// per input. A failed fetch is logged and treated as an empty list.
    pub async fn load_board(&self, key_mode: KeyMode) -> RateBoard {
        let records = stream::once(async { Loaded::Records(self.fetch_records().await) });
        let windows = stream::once(async { Loaded::Windows(self.fetch_time_windows().await) });
        let mut arrivals = std::pin::pin!(stream::select(records, windows));

        let mut board = RateBoard::new(key_mode);
        while let Some(loaded) = arrivals.next().await {
            match loaded {
                Loaded::Records(result) => {
                    let records = result.unwrap_or_else(|e| {
                        warn!(error = %e, "toll record fetch failed");
                        Vec::new()
                    });
                    board.replace_records(records);
                }
                Loaded::Windows(result) => {
                    let windows = result.unwrap_or_else(|e| {
                        warn!(error = %e, "time window fetch failed");
                        Vec::new()
                    });
                    board.replace_time_windows(windows);
                }
            }
        }

        info!(
            zones = board.zones().len(),
            records = board.records().len(),
            windows = board.time_windows().len(),
            "rate board loaded"
        );
        board
    }

    // ── Favorites ────────────────────────────────────────────────────

    /// Saved home and work locations for `username`.
    pub async fn try_favorites(&self, username: &str) -> Result<Vec<FavoriteLocation>, CoreError> {
        let resp = self.addresses.get_address(username).await?;
        Ok(favorites_from_response(&resp))
    }

    /// Like [`try_favorites`](Self::try_favorites), but a failure yields an
    /// empty list.
    pub async fn favorites(&self, username: &str) -> Vec<FavoriteLocation> {
        self.try_favorites(username).await.unwrap_or_else(|e| {
            warn!(username, error = %e, "favorite address fetch failed");
            Vec::new()
        })
    }
}
