//! OceanIQ Publish - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for uploading a dataset file with its metadata
//! and requesting a shareable link from the publish backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PublishPage                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file, draft, publish status)            │
//! │  ├── FeatureCards                                           │
//! │  ├── ShareSection (public link)                             │
//! │  └── DatasetsPanel                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Draft, status, API and error types
//! - [`state`] - Publish form state transitions
//! - [`components`] - UI components
//! - [`services`] - Backend communication and clipboard

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Draft
    DatasetDraft, DraftField, License, Visibility,
    // Status
    UploadStatus,
    // Files
    FileHandle,
    // API
    GenerateLinkRequest, GenerateLinkResponse,
    // Errors
    PublishError, PublishResult,
};

// State
pub use state::PublishForm;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount the app.
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 OceanIQ Publish - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Publish datasets"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=PublishPage/>
                    <Route path="/publish" view=PublishPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn PublishPage() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadSection/>
            <FeatureCards/>
            <ShareSection/>
            <DatasetsPanel/>
        </div>
    }
}
