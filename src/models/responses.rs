use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub status: String,
    pub words: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_conversions: u64,
    pub failed_conversions: u64,
}
