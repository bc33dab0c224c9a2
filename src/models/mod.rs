pub mod requests;
pub mod responses;

pub use requests::ConvertRequest;
pub use responses::{ConvertResponse, HealthResponse, StatsResponse};
