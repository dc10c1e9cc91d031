//! Optional external analytics sink.
//!
//! Computed aggregates can be forwarded to a webhook for secondary
//! analysis; whatever the webhook answers is attached to read responses
//! as an opaque annotation. The call is best-effort: any failure is
//! logged and the primary operation proceeds without an annotation.

use once_cell::sync::OnceCell;

static SINK: OnceCell<AnalyticsSink> = OnceCell::new();

pub struct AnalyticsSink {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl AnalyticsSink {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .no_proxy()
                .build()
                .expect("Failed to create HTTP client"),
            webhook_url,
        }
    }

    /// Forward a payload to the webhook and return its reply, if any.
    pub async fn analyze(&self, payload: serde_json::Value) -> Option<serde_json::Value> {
        let url = self.webhook_url.as_ref()?;

        match self.client.post(url).json(&payload).send().await {
            Ok(response) => match response.json::<serde_json::Value>().await {
                Ok(body) => Some(body),
                Err(e) => {
                    tracing::warn!("Analytics webhook returned unreadable body: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Analytics webhook call failed: {}", e);
                None
            }
        }
    }
}

/// Build the process-wide sink from configuration. Called once at startup.
pub fn initialize(webhook_url: Option<String>) -> anyhow::Result<()> {
    match &webhook_url {
        Some(url) => tracing::info!("Analytics sink enabled: {}", url),
        None => tracing::info!("Analytics sink disabled (no webhook_url configured)"),
    }
    SINK.set(AnalyticsSink::new(webhook_url))
        .map_err(|_| anyhow::anyhow!("Analytics sink already initialized"))
}

pub fn sink() -> &'static AnalyticsSink {
    SINK.get().expect("Analytics sink has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_sink_yields_no_annotation() {
        let sink = AnalyticsSink::new(None);
        let annotation = sink.analyze(serde_json::json!({"type": "test"})).await;
        assert!(annotation.is_none());
    }

    #[tokio::test]
    async fn unreachable_webhook_is_swallowed() {
        // Port 9 (discard) is not listening; the call must fail quietly.
        let sink = AnalyticsSink::new(Some("http://127.0.0.1:9/webhook".to_string()));
        let annotation = sink.analyze(serde_json::json!({"type": "test"})).await;
        assert!(annotation.is_none());
    }
}
