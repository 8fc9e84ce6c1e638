//! u601 Match Resume UI Module (MVVM Standard)
//!
//! Structure:
//! - api.rs: HTTP call to the resume matching service
//! - view_model.rs: ResumeMatchState transitions and ResumeMatchVm signals
//! - view.rs: Main component ResumeUploadPage
//! - job_card.rs, resume_table.rs: result components
//! - format.rs: display rules

mod api;
mod format;
mod job_card;
mod resume_table;
mod view;
mod view_model;

pub use view::ResumeUploadPage;
pub use view_model::{JobsSection, ResumeMatchState, ResumeMatchVm};
