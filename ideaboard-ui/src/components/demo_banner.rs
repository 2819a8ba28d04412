use ideaboard_app::domain::StoreMode;
use leptos::prelude::*;

/// Shown whenever the board is not backed by a database, so nobody mistakes
/// local ideas for saved ones.
#[component]
pub fn DemoBanner(mode: StoreMode) -> impl IntoView {
    (!mode.is_persistent()).then(|| view! {
        <div class="demo-banner" role="status">
            <strong>"Demo Mode"</strong>
            " Ideas and votes live in server memory only and disappear on restart."
        </div>
    })
}
