//! Resume Match - View Model
//!
//! `ResumeMatchState` holds everything the page shows and changes only
//! through its transition methods. `ResumeMatchVm` wraps it in signals.

use super::api::upload_resume;
use contracts::usecases::u601_match_resume::{JobListing, ResumeData, UploadResumeResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Number of job cards shown initially and added by each "show more"
pub const JOBS_PAGE_STEP: usize = 3;

/// Which job block the page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobsSection {
    Grid,
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeMatchState {
    pub resume_data: Option<ResumeData>,
    pub jobs: Vec<JobListing>,
    pub visible_count: usize,
    pub is_loading: bool,
    /// Last upload failure; kept for diagnostics and never rendered
    pub last_error: Option<String>,
}

impl Default for ResumeMatchState {
    fn default() -> Self {
        Self {
            resume_data: None,
            jobs: Vec::new(),
            visible_count: JOBS_PAGE_STEP,
            is_loading: false,
            last_error: None,
        }
    }
}

impl ResumeMatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an upload of `file`.
    ///
    /// Hands the file back when the request should be sent; without a file
    /// nothing changes and `None` is returned.
    pub fn begin_upload<F>(&mut self, file: Option<F>) -> Option<F> {
        let file = file?;
        self.is_loading = true;
        Some(file)
    }

    /// Apply the outcome of an upload.
    ///
    /// Success replaces resume data and jobs wholesale. Failure keeps the
    /// previous results. `visible_count` is left as is in both cases.
    pub fn finish_upload(&mut self, result: Result<UploadResumeResponse, String>) {
        match result {
            Ok(response) => {
                self.resume_data = response.resume_data;
                self.jobs = response.job_data;
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e);
            }
        }
        self.is_loading = false;
    }

    pub fn show_more(&mut self) {
        self.visible_count += JOBS_PAGE_STEP;
    }

    /// Leading jobs currently on screen, in server order
    pub fn visible_jobs(&self) -> &[JobListing] {
        let end = self.visible_count.min(self.jobs.len());
        &self.jobs[..end]
    }

    /// Hidden jobs remain and at least one listing is a real match
    pub fn show_more_available(&self) -> bool {
        self.jobs.len() > self.visible_count
            && self.jobs.iter().any(|job| !job.is_no_jobs_placeholder())
    }

    pub fn jobs_section(&self) -> JobsSection {
        if self.jobs.is_empty() {
            JobsSection::Empty
        } else {
            JobsSection::Grid
        }
    }
}

#[derive(Clone, Copy)]
pub struct ResumeMatchVm {
    pub selected_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub state: RwSignal<ResumeMatchState>,
}

impl ResumeMatchVm {
    pub fn new() -> Self {
        Self {
            selected_file: RwSignal::new_local(None),
            state: RwSignal::new(ResumeMatchState::new()),
        }
    }

    /// Replace the current selection; `None` means "no file"
    pub fn select_file(&self, file: Option<web_sys::File>) {
        if let Some(f) = &file {
            log::debug!("Selected resume file {} ({} bytes)", f.name(), f.size());
        }
        self.selected_file.set(file);
    }

    /// Upload the selected file and store the results.
    ///
    /// Failures are logged only; the previous results stay on screen.
    pub fn submit(&self) {
        let selected = self.selected_file.get_untracked();
        let Some(file) = self.state.try_update(|s| s.begin_upload(selected)).flatten() else {
            return;
        };
        log::info!("Uploading resume {} ({} bytes)", file.name(), file.size());

        let state = self.state;
        spawn_local(async move {
            let result = upload_resume(file).await;
            match &result {
                Ok(response) => log::info!(
                    "Resume {} processed: {} fields, {} jobs",
                    response.filename.as_deref().unwrap_or("<unnamed>"),
                    response.resume_data.as_ref().map_or(0, ResumeData::field_count),
                    response.job_data.len()
                ),
                Err(e) => log::error!("Error uploading the file: {}", e),
            }
            state.update(|s| s.finish_upload(result));
        });
    }

    pub fn show_more(&self) {
        self.state.update(ResumeMatchState::show_more);
    }
}

impl Default for ResumeMatchVm {
    fn default() -> Self {
        Self::new()
    }
}
