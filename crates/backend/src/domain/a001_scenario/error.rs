use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the scenario lifecycle.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario does not exist or was soft-deleted.
    #[error("Scenario not found")]
    NotFound,

    /// The payload shape is malformed (not a business-rule violation;
    /// the calculator itself accepts any numbers).
    #[error("Invalid scenario payload: {0}")]
    Validation(String),

    /// A durable-store call failed. Carries the operation name and the
    /// scenario id so the failure can be diagnosed without exposing
    /// storage internals to the caller.
    #[error("Scenario store failed during {op} for '{id}': {source}")]
    Store {
        op: &'static str,
        id: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ScenarioError {
    pub fn store(op: &'static str, id: impl Into<String>, source: anyhow::Error) -> Self {
        ScenarioError::Store {
            op,
            id: id.into(),
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ScenarioError::NotFound => StatusCode::NOT_FOUND,
            ScenarioError::Validation(_) => StatusCode::BAD_REQUEST,
            ScenarioError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(ScenarioError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ScenarioError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ScenarioError::store("insert", "abc", anyhow::anyhow!("disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_error_names_operation_and_id() {
        let err = ScenarioError::store("update", "42", anyhow::anyhow!("locked"));
        let msg = err.to_string();
        assert!(msg.contains("update"));
        assert!(msg.contains("42"));
    }
}
