//! One-click share section.
//!
//! Requests a public link for the placeholder dataset and copies it to the
//! clipboard. Failures are logged and never shown to the user.

use leptos::*;

use crate::config::{CONTACT_EMAIL, PLACEHOLDER_DATASET_ID};
use crate::services::{alert, copy_to_clipboard, generate_link, link_to_copy};

#[component]
pub fn ShareSection() -> impl IntoView {
    let on_create_link = move |_| {
        log::info!("🔗 Requesting public link for {}", PLACEHOLDER_DATASET_ID);

        spawn_local(async move {
            let Some(link) = link_to_copy(generate_link(PLACEHOLDER_DATASET_ID).await) else {
                return;
            };

            match copy_to_clipboard(&link).await {
                Ok(()) => alert("Public link copied to clipboard!"),
                Err(e) => log::error!("Error creating public link: {}", e),
            }
        });
    };

    view! {
        <div class="card share-card">
            <h2 class="section-title">"One-click share"</h2>
            <p class="section-subtitle">
                "Expose as REST, GraphQL, or tiles. Embed interactive dashboards anywhere."
            </p>
            <div class="share-actions">
                <button class="btn btn-primary" on:click=on_create_link>
                    "🔗 Create public link"
                </button>
                <a href=format!("mailto:{}", CONTACT_EMAIL) class="btn btn-secondary">
                    "Talk to us"
                </a>
            </div>
        </div>
    }
}
