//! Resume Match - page component

use super::format::format_file_size;
use super::job_card::{JobCard, NoJobsFound};
use super::resume_table::ResumeTable;
use super::view_model::{JobsSection, ResumeMatchState, ResumeMatchVm};
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_match_resume::MatchResume;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ResumeUploadPage() -> impl IntoView {
    let vm = ResumeMatchVm::new();

    let handle_file_select = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        vm.select_file(file);
    };

    let is_loading = Signal::derive(move || vm.state.with(|s| s.is_loading));

    view! {
        <div id=format!("{}--usecase", MatchResume::full_name()) class="resume-page">
            <PageHeader
                title=MatchResume::display_name()
                subtitle=MatchResume::description().to_string()
            />

            <div class="resume-page__top">
                // Upload
                <CardAnimated class="resume-page__upload">
                    <h2 class="resume-page__section-title">"Upload Your Resume"</h2>
                    <input
                        id="resume-file-input"
                        type="file"
                        class="resume-page__file-input"
                        on:change=handle_file_select
                    />
                    {move || vm.selected_file.with(|file| match file {
                        Some(f) => view! {
                            <span class="resume-page__fileinfo">
                                {icon("file")}
                                " "
                                <strong>{f.name()}</strong>
                                {format!(" ({})", format_file_size(f.size()))}
                            </span>
                        }.into_any(),
                        None => view! {
                            <span class="resume-page__filehint">"No file selected"</span>
                        }.into_any(),
                    })}
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="resume-page__upload-btn"
                        disabled=is_loading
                        on_click=move |_| vm.submit()
                    >
                        {icon("upload")}
                        {move || if is_loading.get() { " Uploading..." } else { " Upload Resume" }}
                    </Button>
                </CardAnimated>

                // Parsed resume fields
                {move || vm.state.with(|s| s.resume_data.clone()).map(|data| view! {
                    <CardAnimated class="resume-page__resume">
                        <h2 class="resume-page__section-title">"Resume Data"</h2>
                        <ResumeTable data=data />
                    </CardAnimated>
                })}
            </div>

            // Jobs
            {move || vm.state.with(|s| match s.jobs_section() {
                JobsSection::Grid => {
                    let cards = s
                        .visible_jobs()
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, job)| view! { <JobCard job=job index=index /> })
                        .collect_view();
                    view! { <div class="job-grid">{cards}</div> }.into_any()
                }
                JobsSection::Empty => view! { <NoJobsFound /> }.into_any(),
            })}

            {move || vm.state.with(ResumeMatchState::show_more_available).then(|| view! {
                <div class="resume-page__more">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.show_more()>
                        {icon("chevron-down")}
                        " Show More Jobs"
                    </Button>
                </div>
            })}
        </div>
    }
}
