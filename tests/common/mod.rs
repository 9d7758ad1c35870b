//! In-process stand-ins for the airport panel and the PushPlus endpoint.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use airport_checkin::{Config, Credentials};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};

pub const LOGIN_PATH: &str = "/api/v1/passport/auth/login";
pub const CHECKIN_PATH: &str = "/api/v1/user/checkIn";
pub const PUSH_PATH: &str = "/send";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

/// Canned responses plus a log of every request received.
#[derive(Clone)]
pub struct MockPanel {
    pub login_body: Value,
    pub checkin_status: StatusCode,
    pub checkin_body: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockPanel {
    pub fn new() -> Self {
        Self {
            login_body: json!({ "data": { "auth_data": "Bearer session-abc" } }),
            checkin_status: StatusCode::OK,
            checkin_body: json!({
                "status": "success",
                "message": "Checked in",
                "data": { "reward_mb": 500, "total_checkin_traffic": 107374182400u64 }
            })
            .to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn login_response(mut self, body: Value) -> Self {
        self.login_body = body;
        self
    }

    pub fn checkin_response(mut self, status: StatusCode, body: impl Into<String>) -> Self {
        self.checkin_status = status;
        self.checkin_body = body.into();
        self
    }

    /// Serve on an ephemeral port and return the base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route(LOGIN_PATH, post(login))
            .route(CHECKIN_PATH, get(check_in))
            .route(PUSH_PATH, post(push))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    fn record(&self, uri: &Uri, headers: HeaderMap, body: String) {
        self.requests.lock().unwrap().push(Recorded {
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            headers,
            body,
        });
    }
}

async fn login(
    State(mock): State<MockPanel>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    mock.record(&uri, headers, body);
    Json(mock.login_body.clone())
}

async fn check_in(
    State(mock): State<MockPanel>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    mock.record(&uri, headers, body);
    (mock.checkin_status, mock.checkin_body.clone())
}

async fn push(
    State(mock): State<MockPanel>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    mock.record(&uri, headers, body);
    Json(json!({ "code": 200, "msg": "请求成功" }))
}

pub fn password_config(base_url: &str, pushplus_token: Option<&str>) -> Config {
    Config {
        credentials: Credentials::Password {
            email: "me@example.com".to_string(),
            password: "hunter2".to_string(),
        },
        pushplus_token: pushplus_token.map(str::to_string),
        base_url: base_url.to_string(),
        pushplus_url: format!("{}{}", base_url, PUSH_PATH),
        proxy: None,
    }
}

pub fn session_config(base_url: &str, pushplus_token: Option<&str>) -> Config {
    Config {
        credentials: Credentials::Session {
            token: "tok-123".to_string(),
            cookie: "PHPSESSID=xyz; theme=dark".to_string(),
        },
        ..password_config(base_url, pushplus_token)
    }
}
