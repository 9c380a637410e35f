// erpview-api: Async Rust client for the ERP rate and favorite-address services

pub mod address;
pub mod client;
pub mod error;
pub mod models;
pub mod rates;
pub mod transport;

pub use address::AddressClient;
pub use client::HttpClient;
pub use error::Error;
pub use models::{AddressRequest, AddressResponse, RawTollRecord};
pub use rates::RatesClient;
pub use transport::TransportConfig;
