use crate::usecases::u601_match_resume::ResumeUploadPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ResumeUploadPage />
        </ConfigProvider>
    }
}
