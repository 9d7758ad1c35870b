//! PushPlus notification delivery.
//!
//! Delivery is best effort: failures are logged and reported through
//! [`NotifyOutcome`], never as an error that could replace the outcome of
//! the check-in itself.

use wreq::{Client, header};

use crate::config::Config;
use crate::error::Result;
use crate::types::PushRequest;

const TEMPLATE_HTML: &str = "html";

/// What happened to a notification
#[must_use = "notification outcomes should be discarded explicitly with `let _ =`"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// No PushPlus token configured; nothing was sent
    Disabled,
    Delivered,
    Failed(String),
}

pub struct Notifier {
    http_client: Client,
    endpoint: String,
    token: Option<String>,
}

impl Notifier {
    pub fn new(http_client: Client, endpoint: &str, token: Option<String>) -> Self {
        Self {
            http_client,
            endpoint: endpoint.to_string(),
            token,
        }
    }

    pub fn from_config(http_client: Client, config: &Config) -> Self {
        Self::new(http_client, &config.pushplus_url, config.pushplus_token.clone())
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    /// Send an HTML notification. Returns immediately when no token is set.
    pub async fn notify(&self, title: &str, content: &str) -> NotifyOutcome {
        let Some(token) = self.token.as_deref() else {
            return NotifyOutcome::Disabled;
        };

        match self.send(token, title, content).await {
            Ok(()) => {
                tracing::info!("✅ 推送已发送");
                NotifyOutcome::Delivered
            }
            Err(e) => {
                tracing::error!("❌ 推送失败: {}", e);
                NotifyOutcome::Failed(e.to_string())
            }
        }
    }

    async fn send(&self, token: &str, title: &str, content: &str) -> Result<()> {
        let payload = PushRequest {
            token,
            title,
            content,
            template: TEMPLATE_HTML,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(&payload)?)
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "PushPlus responded");
        Ok(())
    }
}
