use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Literal `status` value of a successful check-in
pub const STATUS_SUCCESS: &str = "success";

/// Substring of `message` when today's check-in was already done
pub const ALREADY_CHECKED_IN: &str = "already checked in";

/// Placeholder message used when the check-in body is not JSON
pub const NON_JSON_MESSAGE: &str = "非 JSON 响应";

/// Login request body
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from `/api/v1/passport/auth/login`
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<LoginData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginData {
    /// Newer panels return the ready-to-use header value here
    #[serde(default)]
    pub auth_data: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginData {
    /// First non-empty token field, in order of preference.
    pub fn session_token(&self) -> Option<&str> {
        [&self.auth_data, &self.token]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|value| !value.is_empty())
    }
}

impl LoginResponse {
    pub fn session_token(&self) -> Option<&str> {
        self.data.as_ref()?.session_token()
    }
}

/// Body of the check-in endpoint.
///
/// Decoded field by field from any JSON value: a field that is missing or
/// has an unexpected type reads as `None` without affecting the others.
/// Blank messages count as missing. `raw` keeps the body exactly as sent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ApiResult {
    pub status: Option<String>,
    pub message: Option<String>,
    pub data: Option<CheckinData>,
    pub raw: Value,
}

impl From<Value> for ApiResult {
    fn from(raw: Value) -> Self {
        let text = |key: &str| {
            raw.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };

        Self {
            status: text("status"),
            message: text("message"),
            data: raw
                .get("data")
                .filter(|data| data.is_object())
                .map(|data| CheckinData {
                    reward_mb: lenient_number(data.get("reward_mb")),
                    total_checkin_traffic: lenient_number(data.get("total_checkin_traffic")),
                }),
            raw,
        }
    }
}

impl ApiResult {
    /// Synthetic body for a response that could not be decoded
    pub fn non_json() -> Self {
        Self::from(json!({ "message": NON_JSON_MESSAGE }))
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }

    pub fn is_already_checked_in(&self) -> bool {
        self.message
            .as_deref()
            .is_some_and(|m| m.contains(ALREADY_CHECKED_IN))
    }
}

/// Numbers, or strings holding a number, as some panels send them quoted
fn lenient_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckinData {
    /// Traffic granted by this check-in, in MB
    pub reward_mb: Option<f64>,
    /// Traffic accumulated from all check-ins, in bytes
    pub total_checkin_traffic: Option<f64>,
}

/// Outcome of a check-in call
#[derive(Debug, Clone)]
pub struct CheckinResponse {
    /// HTTP status was 2xx
    pub http_ok: bool,
    pub body: ApiResult,
}

/// Card flavour, drives title, colour and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Info,
    Error,
}

/// One label/value row on a notification card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub label: String,
    pub value: String,
    pub highlight: bool,
}

impl CardItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            highlight: false,
        }
    }

    pub fn highlighted(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            highlight: true,
            ..Self::new(label, value)
        }
    }
}

/// Everything needed to render and send one notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyData {
    pub kind: NotifyKind,
    pub title: String,
    pub items: Vec<CardItem>,
}

impl NotifyData {
    /// Value of the first item with this label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.value.as_str())
    }
}

/// Body posted to the PushPlus send endpoint
#[derive(Debug, Serialize)]
pub struct PushRequest<'a> {
    pub token: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub template: &'a str,
}
