use crate::config::SuperintentConfig;
use anyhow::Result;
use async_trait::async_trait;
use core_logic::{ApiError, ProxyEndpoint};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of the daily check-in endpoint.
#[derive(Debug, Clone, Copy)]
pub struct CheckInReward {
    pub success: bool,
    pub points: u64,
}

/// The mission service wire surface. One implementor instance is bound
/// to one identity's session; cookies from a successful sign-in stay
/// inside it.
#[async_trait]
pub trait MissionApi: Send + Sync {
    async fn fetch_nonce(&self) -> Result<String>;
    async fn sign_in(&self, message: &str, signature: &str) -> Result<()>;
    async fn validate_referral(&self, code: &str) -> Result<bool>;
    async fn bind_referral(&self, code: &str) -> Result<bool>;
    async fn has_checked_in_today(&self) -> Result<bool>;
    async fn perform_check_in(&self) -> Result<CheckInReward>;
    async fn fetch_stats(&self) -> Result<u64>;
}

/// Builds a fresh client (fresh cookie jar) per identity.
pub trait ClientFactory: Send + Sync {
    fn build(&self, proxy: Option<&ProxyEndpoint>) -> Result<Arc<dyn MissionApi>>;
}

pub struct SuperintentClient {
    http: reqwest::Client,
    base_url: String,
}

impl SuperintentClient {
    pub fn new(config: &SuperintentConfig, proxy: Option<&ProxyEndpoint>) -> Result<Self> {
        let http_config = config.to_http_config();

        let mut builder = reqwest::Client::builder()
            .default_headers(browser_headers(&config.origin)?)
            .cookie_store(true)
            .timeout(Duration::from_secs(http_config.timeout_secs));

        if let Some(endpoint) = proxy {
            builder = builder.proxy(reqwest::Proxy::all(endpoint.url())?);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Fixed browser-mimicking header set sent with every request.
fn browser_headers(origin: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ORIGIN, HeaderValue::from_str(origin)?);
    headers.insert(
        header::REFERER,
        HeaderValue::from_str(&format!("{}/", origin))?,
    );
    headers.insert(
        "sec-ch-ua",
        HeaderValue::from_static(
            "\"Google Chrome\";v=\"143\", \"Chromium\";v=\"143\", \"Not A(Brand\";v=\"24\"",
        ),
    );
    headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
    headers.insert("sec-ch-ua-platform", HeaderValue::from_static("\"Windows\""));
    headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
    headers.insert("sec-fetch-site", HeaderValue::from_static("same-site"));
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36",
        ),
    );
    Ok(headers)
}

#[derive(Deserialize)]
struct NonceResponse {
    nonce: Option<String>,
}

#[derive(Deserialize)]
struct FlagResponse {
    #[serde(default)]
    success: bool,
}

#[derive(Deserialize)]
struct StatusResponse {
    #[serde(default, rename = "hasCheckedInToday")]
    has_checked_in_today: bool,
}

#[derive(Deserialize)]
struct CheckInResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "pointsGranted")]
    points_granted: u64,
}

#[derive(Deserialize)]
struct StatsResponse {
    #[serde(default, rename = "totalPoints")]
    total_points: u64,
}

#[async_trait]
impl MissionApi for SuperintentClient {
    async fn fetch_nonce(&self) -> Result<String> {
        let url = self.url("/v1/auth/nonce");
        let response: NonceResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.nonce.ok_or_else(|| {
            ApiError::MissingField {
                field: "nonce".to_string(),
                endpoint: url,
            }
            .into()
        })
    }

    async fn sign_in(&self, message: &str, signature: &str) -> Result<()> {
        self.http
            .post(self.url("/v1/auth/siwe"))
            .json(&json!({ "message": message, "signature": signature }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn validate_referral(&self, code: &str) -> Result<bool> {
        let response: FlagResponse = self
            .http
            .post(self.url("/v1/me/referral/validate"))
            .json(&json!({ "referralCode": code }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.success)
    }

    async fn bind_referral(&self, code: &str) -> Result<bool> {
        let response: FlagResponse = self
            .http
            .post(self.url("/v1/me/referral/bind"))
            .json(&json!({ "referralCode": code }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.success)
    }

    async fn has_checked_in_today(&self) -> Result<bool> {
        let response: StatusResponse = self
            .http
            .get(self.url("/v1/check-in/status"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.has_checked_in_today)
    }

    async fn perform_check_in(&self) -> Result<CheckInReward> {
        let response: CheckInResponse = self
            .http
            .post(self.url("/v1/check-in"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(CheckInReward {
            success: response.success,
            points: response.points_granted,
        })
    }

    async fn fetch_stats(&self) -> Result<u64> {
        let response: StatsResponse = self
            .http
            .get(self.url("/v1/me/stats"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.total_points)
    }
}

pub struct SuperintentClientFactory {
    config: SuperintentConfig,
}

impl SuperintentClientFactory {
    pub fn new(config: SuperintentConfig) -> Self {
        Self { config }
    }
}

impl ClientFactory for SuperintentClientFactory {
    fn build(&self, proxy: Option<&ProxyEndpoint>) -> Result<Arc<dyn MissionApi>> {
        Ok(Arc::new(SuperintentClient::new(&self.config, proxy)?))
    }
}
