use leptos::*;

#[component]
pub fn DatasetsPanel() -> impl IntoView {
    view! {
        <div class="card datasets-card">
            <h2 class="section-title">"Your datasets"</h2>
            <div class="datasets-empty">
                <div class="datasets-icon">"🗄️"</div>
                <p>"No datasets published yet. Upload your first dataset to get started."</p>
            </div>
        </div>
    }
}
