// ── Domain model ──

pub mod category;
pub mod favorite;
pub mod record;

pub use category::{DayType, VehicleType};
pub use favorite::{FavoriteLocation, favorite_locations};
pub use record::{RecordId, TIME_RANGE_SEPARATOR, TollRecord, time_range_key};
