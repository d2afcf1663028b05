mod health;
mod location;
mod records;
mod search;
mod time;

pub use health::health_check;
pub use location::resolve_current_location;
pub use records::list_records;
pub use search::{search_address, search_status};
pub use time::local_time;
