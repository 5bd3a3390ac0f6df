//! Dataset upload form.
//!
//! Handles file selection, metadata editing and the publish request.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::ACCEPTED_FILE_TYPES;
use crate::services::submit_dataset;
use crate::state::PublishForm;
use crate::types::{DraftField, FileHandle, License, UploadStatus, Visibility};

#[component]
pub fn UploadSection() -> impl IntoView {
    let form = create_rw_signal(PublishForm::<File>::new());

    // File picker handler
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            log::info!("📄 Selected {} ({} bytes)", file.file_name(), FileHandle::size(&file));
            form.update(|f| f.select_file(file));
        }
    };

    let edit = move |field: DraftField| {
        move |ev: Event| {
            let value = event_target_value(&ev);
            form.update(|f| f.edit(field, value));
        }
    };

    let on_submit = move |_| {
        let Some((file, draft)) = form.try_update(|f| f.begin_upload()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = submit_dataset(file, draft).await;
            match &result {
                Ok(()) => log::info!("✅ Dataset published"),
                Err(e) => log::error!("❌ Upload error: {}", e),
            }
            form.update(|f| f.finish_upload(&result));
        });
    };

    let status = move || form.with(|f| f.status());
    let is_uploading = move || status().is_uploading();

    view! {
        <div class="card upload-card">
            <h2 class="section-title">"Upload new dataset"</h2>

            <div class="upload-grid">
                <div>
                    <label class="field-label">"Select file"</label>
                    <div class="drop-zone">
                        <input
                            type="file"
                            id="file-upload"
                            class="hidden"
                            accept=ACCEPTED_FILE_TYPES
                            on:change=on_file_change
                        />
                        <label for="file-upload" class="drop-zone-label">
                            <div class="upload-icon">"📤"</div>
                            <p class="drop-zone-text">
                                {move || form.with(|f| {
                                    f.file()
                                        .map(|file| file.file_name())
                                        .unwrap_or_else(|| "Drag and drop or click to browse".to_string())
                                })}
                            </p>
                            <p class="drop-zone-hint">"Supports CSV, JSON, NetCDF, FASTQ"</p>
                        </label>
                    </div>
                </div>

                <div class="draft-fields">
                    <div>
                        <label class="field-label">"Dataset name"</label>
                        <input
                            type="text"
                            class="field-input"
                            placeholder="Enter dataset name"
                            prop:value=move || form.with(|f| f.draft().name.clone())
                            on:input=edit(DraftField::Name)
                        />
                    </div>

                    <div>
                        <label class="field-label">"Description"</label>
                        <textarea
                            class="field-input"
                            rows="3"
                            placeholder="Describe your dataset"
                            prop:value=move || form.with(|f| f.draft().description.clone())
                            on:input=edit(DraftField::Description)
                        ></textarea>
                    </div>

                    <div class="field-row">
                        <div>
                            <label class="field-label">"License"</label>
                            <select
                                class="field-input"
                                prop:value=move || form.with(|f| f.draft().license.as_str())
                                on:change=edit(DraftField::License)
                            >
                                {License::ALL
                                    .into_iter()
                                    .map(|license| view! {
                                        <option
                                            value=license.as_str()
                                            selected=move || form.with(|f| f.draft().license == license)
                                        >
                                            {license.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div>
                            <label class="field-label">"Visibility"</label>
                            <select
                                class="field-input"
                                prop:value=move || form.with(|f| f.draft().visibility.as_str())
                                on:change=edit(DraftField::Visibility)
                            >
                                {Visibility::ALL
                                    .into_iter()
                                    .map(|visibility| view! {
                                        <option
                                            value=visibility.as_str()
                                            selected=move || form.with(|f| f.draft().visibility == visibility)
                                        >
                                            {visibility.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>
                </div>
            </div>

            <div class="upload-actions">
                <button
                    class="btn btn-primary"
                    on:click=on_submit
                    disabled=move || !form.with(|f| f.can_submit())
                >
                    <Show
                        when=is_uploading
                        fallback=|| "📁 Publish Dataset"
                    >
                        <span class="spinner"></span>
                        "Uploading..."
                    </Show>
                </button>

                <Show
                    when=move || status() == UploadStatus::Succeeded
                    fallback=|| view! { }
                >
                    <div class="status-success">"✓ Dataset published successfully!"</div>
                </Show>

                <Show
                    when=move || status() == UploadStatus::Failed
                    fallback=|| view! { }
                >
                    <div class="status-error">"✗ Upload failed. Please try again."</div>
                </Show>
            </div>
        </div>
    }
}
