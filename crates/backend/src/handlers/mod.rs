pub mod a001_scenario;
pub mod simulations;

use axum::http::StatusCode;

use crate::domain::a001_scenario::error::ScenarioError;

/// Map a lifecycle error onto an HTTP rejection, logging the full
/// cause server-side so the wire only carries the client-safe message.
pub(crate) fn reject(err: ScenarioError) -> (StatusCode, String) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!("scenario operation failed: {}", err);
    }
    (status, err.to_string())
}
