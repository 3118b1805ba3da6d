/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the analysis server. Override at build time with `DASHBOARD_API_URL`.
    pub const API_BASE_URL: &str = match option_env!("DASHBOARD_API_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Endpoint returning the full post collection
    pub const DATA_POOL_PATH: &str = "/get_data_pool";

    /// Endpoint performing sentiment/readability analysis for a URL
    pub const ANALYSIS_PATH: &str = "/perform_analysis";

    /// Shown in the analysis panel for every failure, whatever the cause
    pub const ANALYSIS_ERROR_MESSAGE: &str = "Failed to perform analysis. Please try again.";

    /// Delay before re-rendering the metrics chart after a window resize
    pub const CHART_RESIZE_DEBOUNCE_MS: u32 = 150;
}
