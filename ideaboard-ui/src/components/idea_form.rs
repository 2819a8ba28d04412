use ideaboard_app::domain::MAX_IDEA_CHARS;
use leptos::prelude::*;

const WARN_AT_CHARS: usize = MAX_IDEA_CHARS - 20;

#[component]
pub fn IdeaForm() -> impl IntoView {
    let text = RwSignal::new(String::new());
    let length = move || text.with(|t| t.chars().count());
    let is_blank = move || text.with(|t| t.trim().is_empty());

    view! {
        <form action="/board/ideas" method="post" class="idea-form">
            <h2 class="idea-form__title">"Share Your Idea"</h2>
            <textarea
                name="text"
                class="idea-form__input"
                placeholder="What's your brilliant idea? (max 280 characters)"
                rows="4"
                maxlength=MAX_IDEA_CHARS.to_string()
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                required
            ></textarea>
            <div class="idea-form__footer">
                <span
                    class="idea-form__counter"
                    class:idea-form__counter--warn=move || { length() > WARN_AT_CHARS }
                >
                    {move || format!("{}/{} characters", length(), MAX_IDEA_CHARS)}
                </span>
                <button
                    type="submit"
                    class="idea-form__button"
                    prop:disabled=move || { is_blank() || length() > MAX_IDEA_CHARS }
                >
                    "Share Idea"
                </button>
            </div>
        </form>
    }
}
