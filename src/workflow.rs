//! The check-in run: check in, interpret, render, notify.
//!
//! Every step after configuration funnels its error into a single handler
//! that sends an error card and reports failure.

use std::process::ExitCode;

use anyhow::Context;

use crate::client::AirportClient;
use crate::config::{Config, ConfigError};
use crate::error::Result;
use crate::interpret::interpret;
use crate::notify::Notifier;
use crate::render::render_card;
use crate::types::{CardItem, NotifyData, NotifyKind};

pub const ERROR_TITLE: &str = "脚本运行失败 🚨";

/// Check in and classify the response, without notifying.
pub async fn check_in(client: &AirportClient, config: &Config) -> Result<NotifyData> {
    let response = client.check_in_as(&config.credentials).await?;
    interpret(response.http_ok, &response.body, config.account_label())
}

/// Run the whole workflow and notify about the outcome.
///
/// Returns `true` when the check-in succeeded or had already been done today.
pub async fn run(client: &AirportClient, notifier: &Notifier, config: &Config) -> bool {
    match check_in(client, config).await {
        Ok(notify_data) => {
            let html = render_card(notify_data.kind, &notify_data.items);
            let _ = notifier.notify(&notify_data.title, &html).await;
            true
        }
        Err(e) => {
            tracing::error!("❌ 运行异常: {}", e);
            let html = render_card(NotifyKind::Error, &error_items(&e.to_string(), config));
            let _ = notifier.notify(ERROR_TITLE, &html).await;
            false
        }
    }
}

/// Entry point shared by the binaries.
///
/// A configuration error ends the run before any client is built, so no
/// request is made. Returns whether the run succeeded.
pub async fn launch(loaded: std::result::Result<Config, ConfigError>) -> anyhow::Result<bool> {
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ 配置错误: {}", e);
            return Ok(false);
        }
    };

    let client = AirportClient::new(&config).context("Failed to build HTTP client")?;
    let notifier = Notifier::from_config(client.http_client().clone(), &config);

    Ok(run(&client, &notifier, &config).await)
}

/// Process exit code for a run outcome
pub fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn error_items(message: &str, config: &Config) -> Vec<CardItem> {
    vec![
        CardItem::highlighted("错误信息", message),
        CardItem::new("账号", config.account_label()),
    ]
}
