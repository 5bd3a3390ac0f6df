//! Static feature cards shown under the upload form.

use leptos::*;

/// Icon, title and blurb of one card.
const FEATURES: [(&str, &str, &str); 3] = [
    (
        "📤",
        "Ingest",
        "Upload CSV/NetCDF/FASTQ or connect live APIs and sensors.",
    ),
    (
        "🌿",
        "Version & lineage",
        "Every change tracked with reproducible pipelines and metadata.",
    ),
    (
        "🛡️",
        "Govern access",
        "Private, shared, or public with roles and signed URLs.",
    ),
];

#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <div class="feature-grid">
            {FEATURES
                .into_iter()
                .map(|(icon, title, blurb)| view! {
                    <div class="card feature-card">
                        <span class="feature-icon">{icon}</span>
                        <div>
                            <h3 class="feature-title">{title}</h3>
                            <p class="feature-blurb">{blurb}</p>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
