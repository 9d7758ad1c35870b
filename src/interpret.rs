//! Turns a check-in response into notification content.

use chrono::{DateTime, Local};

use crate::error::{CheckinError, Result};
use crate::types::{ApiResult, CardItem, NotifyData, NotifyKind};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

pub const SUCCESS_TITLE: &str = "机场签到成功 🎉";
pub const ALREADY_TITLE: &str = "机场今日已签 ✅";

/// Format a byte count as gigabytes with two decimals, e.g. `100.00 GB`.
pub fn format_traffic(bytes: f64) -> String {
    format!("{:.2} GB", bytes / BYTES_PER_GB)
}

/// Format a reward amount as reported by the panel, e.g. `500 MB`.
pub fn format_reward(mb: f64) -> String {
    format!("{} MB", mb)
}

/// Classify a check-in response using the current local time.
pub fn interpret(http_ok: bool, body: &ApiResult, account: &str) -> Result<NotifyData> {
    interpret_at(http_ok, body, account, Local::now())
}

/// Classify a check-in response.
///
/// First match wins: success, then already checked in. Anything else is a
/// [`CheckinError::Business`] carrying the server message, or the body as the
/// server sent it when there is no message.
pub fn interpret_at(
    http_ok: bool,
    body: &ApiResult,
    account: &str,
    now: DateTime<Local>,
) -> Result<NotifyData> {
    if http_ok && body.is_success() {
        let data = body.data.clone().unwrap_or_default();
        let reward = format_reward(data.reward_mb.unwrap_or(0.0));
        let total = format_traffic(data.total_checkin_traffic.unwrap_or(0.0));

        tracing::info!("✅ 签到成功: {}", reward);
        return Ok(NotifyData {
            kind: NotifyKind::Success,
            title: SUCCESS_TITLE.to_string(),
            items: vec![
                CardItem::highlighted("获得流量", reward),
                CardItem::new("剩余总额", total),
                CardItem::new("账号", account),
                CardItem::new("状态", body.message.as_deref().unwrap_or("Success")),
            ],
        });
    }

    if body.is_already_checked_in() {
        let message = body.message.as_deref().unwrap_or_default();
        tracing::info!("⚠️ 今日已签到");
        return Ok(NotifyData {
            kind: NotifyKind::Info,
            title: ALREADY_TITLE.to_string(),
            items: vec![
                CardItem::new("账号", account),
                CardItem::new("提示", message),
                CardItem::new("时间", now.format("%H:%M:%S").to_string()),
            ],
        });
    }

    tracing::error!(http_ok, body = ?body, "❌ 签到失败");
    let detail = match &body.message {
        Some(message) => message.clone(),
        None => body.raw.to_string(),
    };
    Err(CheckinError::Business(detail))
}
