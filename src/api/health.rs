use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::types::dto::common::HealthResponse;
use chrono::Utc;

/// Liveness probe API
pub struct HealthApi;

#[derive(Tags)]
enum HealthTags {
    /// Service liveness
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Report that the service is up
    #[oai(path = "/health", method = "get", tag = "HealthTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
