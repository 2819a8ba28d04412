use ideaboard_app::domain::Idea;
use leptos::prelude::*;

pub fn format_created_at(created_at: &chrono::DateTime<chrono::Utc>) -> String {
    created_at.format("%b %-d, %H:%M").to_string()
}

#[component]
pub fn IdeaCard(idea: Idea) -> impl IntoView {
    let created = format_created_at(&idea.created_at);

    view! {
        <article class="idea" data-idea-id=idea.id.to_string()>
            <p class="idea__text">{idea.text}</p>
            <div class="idea__footer">
                <span class="idea__time">{created}</span>
                <form action="/board/upvote" method="post" class="idea__vote">
                    <input type="hidden" name="idea_id" value=idea.id.to_string()/>
                    <button type="submit" class="idea__upvote" title="Upvote">
                        <span class="idea__arrow">"▲"</span>
                        <span class="idea__count">{idea.upvotes}</span>
                    </button>
                </form>
            </div>
        </article>
    }
}
