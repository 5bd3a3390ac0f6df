//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Publish datasets"</h1>
            <p class="subtitle">
                "Turn raw files and APIs into versioned, FAIR datasets with provenance, "
                "licenses, and access control."
            </p>
        </div>
    }
}
