//! API utilities for talking to the resume matching service
//!
//! Provides helper functions for constructing service URLs.

/// Base URL of the resume matching service
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the base URL for API requests
///
/// Fixed at build time: `RESUME_API_BASE` set while compiling replaces
/// [`DEFAULT_API_BASE`]; nothing is read at runtime.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/upload-resume/", api_base());
/// ```
pub fn api_base() -> String {
    resolve_api_base(option_env!("RESUME_API_BASE"))
}

/// Pick the configured base URL, ignoring blank values and trailing slashes
fn resolve_api_base(configured: Option<&str>) -> String {
    match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => DEFAULT_API_BASE.to_string(),
    }
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default() {
        assert_eq!(resolve_api_base(None), "http://localhost:8000");
        assert_eq!(resolve_api_base(Some("   ")), "http://localhost:8000");
    }

    #[test]
    fn test_resolve_build_override() {
        assert_eq!(
            resolve_api_base(Some("https://match.example.com/")),
            "https://match.example.com"
        );
        assert_eq!(
            resolve_api_base(Some(" http://10.0.0.5:9000 ")),
            "http://10.0.0.5:9000"
        );
    }

    #[test]
    fn test_upload_url() {
        if option_env!("RESUME_API_BASE").is_none() {
            assert_eq!(api_url("/upload-resume/"), "http://localhost:8000/upload-resume/");
        }
    }
}
