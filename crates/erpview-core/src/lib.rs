//! Rate selection and charge resolution between `erpview-api` and the CLI.
//!
//! This crate owns the domain model and the table logic for ERP toll rates:
//!
//! - **[`RateService`]**: facade over the upstream services.
//!   [`load_board()`](RateService::load_board) fetches records and the
//!   time-window catalogue concurrently and hands back a ready [`RateBoard`].
//!
//! - **[`RateBoard`]**: session state. Holds the dataset, rebuilds the
//!   [`ZoneIndex`] whenever an input is replaced, and tracks the per-zone
//!   [`Selections`] the user edits.
//!
//! - **Resolver** ([`resolve`]): first-match lookup of the charge for a
//!   zone under a selection, with unset fields acting as wildcards.
//!
//! - **Domain model** ([`model`]): [`TollRecord`], [`VehicleType`],
//!   [`DayType`] and [`FavoriteLocation`].

pub mod board;
pub mod config;
pub mod convert;
pub mod error;
pub mod index;
pub mod locations;
pub mod model;
pub mod resolve;
pub mod selection;
pub mod service;

// ── Primary re-exports ──────────────────────────────────────────────
pub use board::{RateBoard, RateRow};
pub use config::ServiceConfig;
pub use error::CoreError;
pub use index::{ZoneIndex, ZoneRow, default_selection, rebuild_index};
pub use locations::{known_zones, zone_locations};
pub use resolve::{Charge, NO_DATA, matching_records, record_matches, resolve_charge};
pub use selection::{KeyMode, RowKey, SelectionField, Selections, ZoneSelection, set_field};
pub use service::RateService;

pub use model::{
    DayType, FavoriteLocation, RecordId, TIME_RANGE_SEPARATOR, TollRecord, VehicleType,
    favorite_locations, time_range_key,
};
