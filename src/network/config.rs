/// API route configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    // When empty, the SPA assumes same-origin and builds relative REST URLs
    // ("/api/...").
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin configuration. Used by unit tests and before
    /// `init_api_config()` has run.
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    pub fn new() -> Result<Self, &'static str> {
        // Env var is optional – fall back to same-origin when missing.
        let base = option_env!("API_BASE_URL").unwrap_or("");
        Ok(Self::from_url(base))
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_same_origin(&self) -> bool {
        self.base_url.is_empty()
    }

    /// Get a full API URL for a given path, e.g. `url("/students/3")`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_same_origin() {
        let cfg = ApiConfig::default();
        assert!(cfg.is_same_origin());
        assert_eq!(cfg.url("/students"), "/api/students");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = ApiConfig::from_url("http://localhost:5555/ ");
        assert_eq!(cfg.base_url(), "http://localhost:5555");
        assert_eq!(cfg.url("/courses/2"), "http://localhost:5555/api/courses/2");
    }
}
