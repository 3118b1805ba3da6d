use crate::config::Config;
use crate::models::{
    analysis::{AnalysisRequest, AnalysisResponse, AnalysisResult},
    error::AppError,
};
use serde::{Deserialize, de::DeserializeOwned};

// API CONFIGURATION
/// Endpoints of the analysis server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    data_pool_path: String,
    analysis_path: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the post collection endpoint.
    pub fn data_pool_url(&self) -> String {
        self.join(&self.data_pool_path)
    }

    /// Full URL of the analysis endpoint.
    pub fn analysis_url(&self) -> String {
        self.join(&self.analysis_path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    analysis_path: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn analysis_path(mut self, path: impl Into<String>) -> Self {
        self.analysis_path = Some(path.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
            data_pool_path: Config::DATA_POOL_PATH.to_string(),
            analysis_path: self
                .analysis_path
                .unwrap_or_else(|| Config::ANALYSIS_PATH.to_string()),
        }
    }
}

// ERROR BODY
/// FastAPI reports failures as `{"detail": "..."}`.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    detail: String,
}

/// Extracts the server's error detail, falling back to the raw body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(|_| body.trim().to_string(), |b| b.detail)
}

/// Creates an error based on HTTP status code.
pub fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    let detail = error_detail(body);
    match status.as_u16() {
        404 => AppError::NotFound(format!("Resource not found: {detail}")),
        422 => AppError::Unprocessable(detail),
        400..=499 => AppError::ApiError(format!("Client error {status}: {detail}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {detail}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {detail}")),
    }
}

/// Converts a reqwest error into an appropriate `AppError`.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::ApiError(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::ApiError(format!("Request error: {error}"))
    } else {
        AppError::ApiError(format!("Network error: {error}"))
    }
}

// DASHBOARD CLIENT
/// HTTP client for the post and analysis endpoints.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Requests analysis of the content behind `url`.
    pub async fn perform_analysis(&self, url: &str) -> Result<AnalysisResult, AppError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::DataError("No URL provided for analysis".to_string()));
        }

        let request = AnalysisRequest {
            url: url.to_string(),
        };
        let response = self
            .http
            .post(self.config.analysis_url())
            .json(&request)
            .send()
            .await
            .map_err(classify_error)?;

        let response: AnalysisResponse = Self::read_json(response).await?;
        gloo::console::log!(&format!(
            "Analysis complete (status: {}, source: {})",
            response.status.as_deref().unwrap_or("unknown"),
            response.source.as_deref().unwrap_or("unknown")
        ));

        Ok(response.results)
    }

    /// Issues a single GET and decodes the JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self.http.get(url).send().await.map_err(classify_error)?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches and decodes JSON from `url` using a default client.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    DashboardClient::new()?.fetch_json(url).await
}

/// Runs an analysis using default configuration.
pub async fn perform_analysis(url: &str) -> Result<AnalysisResult, AppError> {
    DashboardClient::new()?.perform_analysis(url).await
}
