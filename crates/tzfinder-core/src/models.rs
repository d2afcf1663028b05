pub mod location;
pub mod record;

pub use location::{Coordinates, PlaceInfo};
pub use record::{RecordSource, TimezoneInfo, TimezoneRecord};
