use super::job_listing::JobListing;
use super::resume_data::ResumeData;
use crate::usecases::common::{UseCaseError, UseCaseResult};
use serde::Deserialize;

/// Successful response of `POST /upload-resume/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResumeResponse {
    /// Name of the stored file, echoed back by the service
    #[serde(default)]
    pub filename: Option<String>,

    /// Parsed resume fields; `null` or absent hides the resume table
    #[serde(default)]
    pub resume_data: Option<ResumeData>,

    /// Matching jobs in server order
    pub job_data: Vec<JobListing>,
}

/// Parse and validate the response body at the service boundary.
///
/// A single malformed job item rejects the whole batch.
pub fn parse_upload_response(body: &str) -> UseCaseResult<UploadResumeResponse> {
    serde_json::from_str::<UploadResumeResponse>(body).map_err(|e| {
        UseCaseError::validation("Malformed upload response").with_details(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = r##"{
        "filename": "cv.pdf",
        "resume_data": {
            "name": "Jane Doe",
            "skills": ["Python", "React"],
            "experience": "5 years",
            "jobInterests": ["Frontend Developer"]
        },
        "job_data": [
            {"title": "React Dev", "company": "Acme", "location": "Berlin",
             "description": "Build UIs", "url": "https://jobs.example/1"},
            {"title": "Python Dev", "description": "Build APIs", "url": "#"}
        ]
    }"##;

    #[test]
    fn test_parse_full_response() {
        let resp = parse_upload_response(FULL_BODY).unwrap();
        assert_eq!(resp.filename.as_deref(), Some("cv.pdf"));
        let resume = resp.resume_data.unwrap();
        assert_eq!(resume.field_count(), 4);
        assert_eq!(resume.get("skills").unwrap().display(), "Python, React");
        assert_eq!(resp.job_data.len(), 2);
        assert_eq!(resp.job_data[0].title, "React Dev");
        assert_eq!(resp.job_data[1].title, "Python Dev");
    }

    #[test]
    fn test_null_resume_data() {
        let resp = parse_upload_response(r#"{"resume_data": null, "job_data": []}"#).unwrap();
        assert!(resp.resume_data.is_none());
        assert!(resp.job_data.is_empty());
        assert!(resp.filename.is_none());
    }

    #[test]
    fn test_missing_job_data_is_rejected() {
        let err = parse_upload_response(r#"{"resume_data": {"name": "x"}}"#).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert!(err.details.unwrap().contains("job_data"));
    }

    #[test]
    fn test_one_bad_job_rejects_whole_batch() {
        let body = r##"{
            "resume_data": {},
            "job_data": [
                {"title": "Ok", "description": "d", "url": "#"},
                {"company": "No title", "description": "d", "url": "#"}
            ]
        }"##;
        let err = parse_upload_response(body).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_not_json() {
        assert!(parse_upload_response("<html>502 Bad Gateway</html>").is_err());
    }
}
