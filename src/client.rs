use chrono::Utc;
use wreq::{Client, Response, header};
use wreq_util::Emulation;

use crate::config::{Config, Credentials};
use crate::error::{CheckinError, Result};
use crate::types::{ApiResult, CheckinResponse, LoginRequest, LoginResponse};

const LOGIN_PATH: &str = "/api/v1/passport/auth/login";
const CHECKIN_PATH: &str = "/api/v1/user/checkIn";

/// User-Agent sent by the password profile
pub const PASSWORD_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36";

/// User-Agent sent by the session profile, matching the browser the cookie came from
pub const SESSION_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

const SEC_CH_UA: &str =
    r#""Google Chrome";v="143", "Chromium";v="143", "Not A(Brand";v="24""#;

const LOGIN_FAILED: &str = "登录失败";

/// HTTP client for the airport panel API
pub struct AirportClient {
    http_client: Client,
    base_url: String,
}

impl AirportClient {
    /// Build a client for the panel at `config.base_url`, honouring the
    /// configured proxy.
    pub fn new(config: &Config) -> Result<Self> {
        let mut http_builder = Client::builder()
            .emulation(Emulation::Chrome143)
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .zstd(true);

        if let Some(ref proxy) = config.proxy {
            tracing::info!("Using proxy: {}", proxy.to_host_port());
            let proxy_url = proxy.to_url();
            http_builder = http_builder.proxy(wreq::Proxy::all(&proxy_url)?);
        }

        Ok(Self::from_client(&config.base_url, http_builder.build()?))
    }

    /// Wrap an existing [`Client`]
    pub fn from_client(base_url: &str, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Underlying HTTP client, shared with the notifier
    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Exchange email and password for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        tracing::info!("🔐 登录中: {}...", email);

        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        let payload = LoginRequest { email, password };
        let response = self
            .http_client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::USER_AGENT, PASSWORD_UA)
            .body(serde_json::to_string(&payload)?)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, "Login response received");

        let login: LoginResponse = serde_json::from_str(&body)?;
        if let Some(token) = login.session_token() {
            return Ok(token.to_string());
        }

        let message = login
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| LOGIN_FAILED.to_string());
        Err(CheckinError::Auth(message))
    }

    /// Check in with a token obtained from [`login`](Self::login).
    ///
    /// The token is sent verbatim as the `authorization` header.
    pub async fn check_in(&self, token: &str) -> Result<CheckinResponse> {
        tracing::info!("🚀 执行签到...");

        let url = format!("{}{}", self.base_url, CHECKIN_PATH);
        let response = self
            .http_client
            .get(&url)
            .header(header::AUTHORIZATION, token)
            .header(header::USER_AGENT, PASSWORD_UA)
            .send()
            .await?;

        read_checkin_response(response).await
    }

    /// Check in with a token and cookie copied from a logged-in browser.
    ///
    /// Sends `Bearer` authorization plus the headers the dashboard itself
    /// sends, and a millisecond timestamp to defeat caching.
    pub async fn check_in_with_cookie(&self, token: &str, cookie: &str) -> Result<CheckinResponse> {
        let url = format!(
            "{}{}?t={}",
            self.base_url,
            CHECKIN_PATH,
            Utc::now().timestamp_millis()
        );

        let response = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json, text/plain, */*")
            .header(header::ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .header("priority", "u=1, i")
            .header("sec-ch-ua", SEC_CH_UA)
            .header("sec-ch-ua-mobile", "?0")
            .header("sec-ch-ua-platform", "\"Windows\"")
            .header("sec-fetch-dest", "empty")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-site", "same-origin")
            .header(header::COOKIE, cookie)
            .header(header::REFERER, format!("{}/dashboard", self.base_url))
            .header(header::USER_AGENT, SESSION_UA)
            .send()
            .await?;

        read_checkin_response(response).await
    }

    /// Run the check-in appropriate for `credentials`, logging in first
    /// when needed.
    pub async fn check_in_as(&self, credentials: &Credentials) -> Result<CheckinResponse> {
        match credentials {
            Credentials::Password { email, password } => {
                let token = self.login(email, password).await?;
                self.check_in(&token).await
            }
            Credentials::Session { token, cookie } => {
                tracing::info!(
                    "🚀 开始签到请求: {}",
                    crate::time::shanghai_now().format("%Y/%m/%d %H:%M:%S")
                );
                self.check_in_with_cookie(token, cookie).await
            }
        }
    }
}

/// Record the HTTP status and decode the body, substituting a placeholder
/// when it is not JSON.
async fn read_checkin_response(response: Response) -> Result<CheckinResponse> {
    let status = response.status();
    let http_ok = status.is_success();
    let text = response.text().await?;

    let body = match serde_json::from_str::<ApiResult>(&text) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(%status, error = %e, "Check-in response is not JSON");
            ApiResult::non_json()
        }
    };

    Ok(CheckinResponse { http_ok, body })
}
