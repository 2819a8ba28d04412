use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(into, default = "Loading ideas...".into())] label: String) -> impl IntoView {
    view! {
        <div class="loading" aria-busy="true">
            <div class="loading__spinner"></div>
            <p class="loading__text">{label}</p>
        </div>
    }
}
