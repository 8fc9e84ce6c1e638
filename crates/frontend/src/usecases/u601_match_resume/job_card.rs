//! Resume Match - job cards

use super::format::{badge_text, company_initial, company_location_line, description_excerpt};
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use contracts::usecases::u601_match_resume::JobListing;
use leptos::prelude::*;
use thaw::*;

pub const NO_JOBS_HEADLINE: &str = "🚀 NO JOBS FOUND 🚀";
pub const NO_JOBS_HELP: &str =
    "Sorry, no matching jobs were found. Please try updating your resume or skills.";

/// Card for one listing; placeholder listings get the centered message instead
#[component]
#[allow(non_snake_case)]
pub fn JobCard(job: JobListing, #[prop(optional)] index: usize) -> impl IntoView {
    let delay_ms = stagger_delay(index);

    if job.is_no_jobs_placeholder() {
        return view! {
            <CardAnimated class="job-card" delay_ms=delay_ms>
                <NoJobsMessage headline=job.title description=job.description />
            </CardAnimated>
        }
        .into_any();
    }

    let initial = company_initial(job.company.as_deref());
    let subtitle = company_location_line(job.company.as_deref(), job.location.as_deref());
    let type_badge = badge_text(job.job_type.as_deref());
    let mode_badge = badge_text(job.mode.as_deref());
    let excerpt = description_excerpt(&job.description);

    view! {
        <CardAnimated class="job-card" delay_ms=delay_ms>
            <div class="job-card__head">
                <div class="job-card__initial">{initial}</div>
                <div>
                    <h3 class="job-card__title">{job.title}</h3>
                    <p class="job-card__subtitle">{subtitle}</p>
                </div>
            </div>

            <div class="job-card__badges">
                {type_badge.map(|t| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{t}</Badge>
                })}
                {mode_badge.map(|m| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{m}</Badge>
                })}
            </div>

            <div class="job-card__body">
                <h4 class="job-card__about">"About the job"</h4>
                <p class="job-card__excerpt">{excerpt}</p>
            </div>

            <div class="job-card__actions">
                <a
                    class="button button--primary job-card__apply"
                    href=job.url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {icon("external-link")}
                    " Apply"
                </a>
                // No behavior attached
                <Button appearance=ButtonAppearance::Secondary>
                    {icon("bookmark")}
                    " Save"
                </Button>
            </div>
        </CardAnimated>
    }
    .into_any()
}

/// Block shown in place of the grid when the job list is empty
#[component]
#[allow(non_snake_case)]
pub fn NoJobsFound() -> impl IntoView {
    view! {
        <div class="no-jobs">
            <NoJobsMessage headline=NO_JOBS_HEADLINE.to_string() description=NO_JOBS_HELP.to_string() />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn NoJobsMessage(headline: String, description: String) -> impl IntoView {
    view! {
        <div class="no-jobs__message">
            <h2 class="no-jobs__headline">{headline}</h2>
            <p class="no-jobs__text">{description}</p>
        </div>
    }
}
