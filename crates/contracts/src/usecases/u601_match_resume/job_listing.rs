use serde::Deserialize;

/// Marker the service puts into the title of a placeholder listing
/// when the search produced zero real matches.
pub const NO_JOBS_FOUND_MARKER: &str = "NO JOBS FOUND";

/// One job posting returned by the matching service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobListing {
    pub title: String,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Employment type, e.g. "Full-time"
    #[serde(rename = "type", default)]
    pub job_type: Option<String>,

    /// Work mode, e.g. "Remote" or "Hybrid"
    #[serde(default)]
    pub mode: Option<String>,

    pub description: String,

    /// Apply link
    pub url: String,
}

impl JobListing {
    /// True for the "no real matches" placeholder item
    pub fn is_no_jobs_placeholder(&self) -> bool {
        self.title.contains(NO_JOBS_FOUND_MARKER)
    }
}
