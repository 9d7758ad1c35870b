//! HTML card rendering for PushPlus notifications.

use std::fmt::Write;

use crate::types::{CardItem, NotifyKind};

impl NotifyKind {
    /// Card header text
    pub fn heading(self) -> &'static str {
        match self {
            NotifyKind::Success => "签到成功",
            NotifyKind::Info => "今日已签",
            NotifyKind::Error => "运行失败",
        }
    }

    /// Accent colour as a CSS hex string
    pub fn color(self) -> &'static str {
        match self {
            NotifyKind::Success => "#52c41a",
            NotifyKind::Info => "#faad14",
            NotifyKind::Error => "#f5222d",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotifyKind::Success => "🎉",
            NotifyKind::Info => "📅",
            NotifyKind::Error => "🚨",
        }
    }
}

/// Render a card listing `items` in order.
pub fn render_card(kind: NotifyKind, items: &[CardItem]) -> String {
    let color = kind.color();
    let mut rows = String::new();
    for item in items {
        let emphasis = if item.highlight {
            format!("color: {color}; font-weight: bold; font-size: 16px;")
        } else {
            String::new()
        };
        // Writing into a String cannot fail
        let _ = write!(
            rows,
            r#"
        <div style="margin-bottom: 10px; font-size: 14px; color: #555; display: flex; align-items: center;">
          <span style="width: 70px; color: #888;">{label}:</span>
          <span style="font-weight: 500; color: #333; {emphasis}">{value}</span>
        </div>"#,
            label = escape_html(&item.label),
            value = escape_html(&item.value),
        );
    }

    format!(
        r#"
    <div style="max-width: 400px; margin: 0 auto; font-family: -apple-system, sans-serif;">
      <div style="background: linear-gradient(135deg, {color}, {color}dd); color: white; padding: 15px; border-radius: 12px 12px 0 0; font-weight: bold; font-size: 16px;">
        {heading} <span>{icon}</span>
      </div>
      <div style="background: #fff; border: 1px solid #eee; border-top: none; padding: 20px; border-radius: 0 0 12px 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.05);">{rows}
      </div>
    </div>
"#,
        heading = kind.heading(),
        icon = kind.icon(),
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
