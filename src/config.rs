//! Configuration helpers for the RAGFlow client

use std::env;

/// Default endpoint of a local RAGFlow server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Get the base URL from the environment or a fallback
///
/// Priority:
/// 1. RAGFLOW_BASE_URL environment variable
/// 2. fallback parameter
/// 3. [`DEFAULT_BASE_URL`]
///
/// # Examples
///
/// ```rust,no_run
/// use ragflow_client::get_base_url;
///
/// // Read from environment, default to localhost
/// let url = get_base_url(None);
///
/// // With fallback
/// let url = get_base_url(Some("http://ragflow.internal:9380"));
/// ```
pub fn get_base_url(fallback: Option<&str>) -> String {
    if let Ok(url) = env::var("RAGFLOW_BASE_URL") {
        return url;
    }

    fallback.unwrap_or(DEFAULT_BASE_URL).to_string()
}

/// Get the API key from the RAGFLOW_API_KEY environment variable
///
/// Returns `None` when the variable is unset, leaving the decision of how to
/// fail to the caller.
pub fn get_api_key() -> Option<String> {
    env::var("RAGFLOW_API_KEY").ok()
}
