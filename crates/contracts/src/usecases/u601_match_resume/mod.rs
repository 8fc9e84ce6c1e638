pub mod job_listing;
pub mod resume_data;
pub mod response;

pub use job_listing::{JobListing, NO_JOBS_FOUND_MARKER};
pub use resume_data::{ResumeData, ResumeFieldValue};
pub use response::{parse_upload_response, UploadResumeResponse};

use crate::usecases::common::UseCaseMetadata;

/// Endpoint path of the resume matching service
pub const UPLOAD_RESUME_PATH: &str = "/upload-resume/";

/// Multipart field name carrying the resume file
pub const UPLOAD_FILE_FIELD: &str = "file";

pub struct MatchResume;

impl UseCaseMetadata for MatchResume {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "match_resume"
    }

    fn display_name() -> &'static str {
        "Smart Job Portal"
    }

    fn description() -> &'static str {
        "Upload a resume to see the parsed fields and matching job postings"
    }
}
