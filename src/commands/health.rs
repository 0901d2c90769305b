//! Health Check Commands
//!
//! Commands for checking the health status of backend services.

use crate::models::response::{CommandResponse, HealthResponse};
use crate::state::AppState;

/// Get the health status of all backend services
pub async fn get_health(state: &AppState) -> CommandResponse<HealthResponse> {
    let mut health = HealthResponse::default();

    // Check store health
    health.store = state.is_store_healthy();

    // Check config health
    health.config = state.is_config_healthy();

    health.pending_write = state.has_pending_write();

    // Overall status
    health.status = if health.store && health.config {
        "healthy".to_string()
    } else {
        "degraded".to_string()
    };

    CommandResponse::ok(health)
}
