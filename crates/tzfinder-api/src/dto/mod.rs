mod request;
mod response;

pub use request::{CurrentLocationRequest, SearchQuery, TimeQuery};
pub use response::{
    CurrentLocationResponse, HealthResponse, RecordsResponse, SearchResponse,
    SearchStatusResponse, TimeResponse,
};
