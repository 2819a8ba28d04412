use crate::components::{DemoBanner, ErrorDisplay, IdeaCard, IdeaForm, LoadingSpinner};
use ideaboard_app::domain::BoardSnapshot;
use ideaboard_errors::AppError;
use leptos::prelude::*;
use server_fn::ServerFnError;

#[server(GetBoardFn, "/api", endpoint = "board")]
pub async fn get_board() -> Result<BoardSnapshot, ServerFnError> {
    use ideaboard_app::AppContext;

    let ctx = expect_context::<AppContext>();

    ctx.list_ideas
        .snapshot()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Recovers the error kind from a server function failure.
fn board_error(err: &ServerFnError) -> AppError {
    match err {
        ServerFnError::ServerError(msg) => msg
            .parse::<AppError>()
            .unwrap_or_else(|_| AppError::Internal(msg.clone())),
        other => AppError::Internal(other.to_string()),
    }
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let board = Resource::new(|| (), |_| get_board());

    view! {
        <header class="header">
            <a href="/" class="header__brand">
                <span class="header__logo">"💡"</span>
                <h1 class="header__title">"Idea Board"</h1>
            </a>
            <AuthSection/>
        </header>

        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || {
                board.get().map(|result| {
                    match result {
                        Ok(snapshot) => view! { <BoardView snapshot=snapshot/> }.into_any(),
                        Err(e) => view! {
                            <ErrorDisplay error=board_error(&e)/>
                        }.into_any(),
                    }
                })
            }}
        </Suspense>

        <script inner_html=LIVE_BOARD_SCRIPT></script>
    }
}

#[component]
fn BoardView(snapshot: BoardSnapshot) -> impl IntoView {
    let count = snapshot.ideas.len();

    view! {
        <DemoBanner mode=snapshot.mode/>
        <IdeaForm/>

        <section class="ideas">
            <h2 class="ideas__title">
                "Recent Ideas (" <span id="idea-count">{count}</span> ")"
            </h2>
            <div id="idea-list" class="ideas__list">
                {if snapshot.ideas.is_empty() {
                    view! {
                        <div class="ideas__empty">
                            <p class="ideas__empty-title">"No ideas yet"</p>
                            <p>"Be the first to share a brilliant idea!"</p>
                        </div>
                    }.into_any()
                } else {
                    snapshot.ideas
                        .into_iter()
                        .map(|idea| view! { <IdeaCard idea=idea/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </section>
    }
}

/// Signs in explicitly once the page has loaded, then shows who you are.
#[component]
fn AuthSection() -> impl IntoView {
    view! {
        <div class="auth-section" id="auth-section">
            <span class="auth-section__status" id="auth-status">"Not signed in"</span>
        </div>
        <script inner_html=AUTH_SCRIPT></script>
    }
}

const AUTH_SCRIPT: &str = r#"
(function() {
    var status = document.getElementById('auth-status');
    fetch('/auth/me', { credentials: 'include' })
        .then(function(r) { return r.json(); })
        .then(function(data) {
            if (data.authenticated) { return data.user; }
            return fetch('/auth/anonymous', { method: 'POST', credentials: 'include' })
                .then(function(r) { return r.json(); });
        })
        .then(function(user) {
            if (user && user.userId) {
                status.textContent = 'Anonymous User';
                document.getElementById('auth-section').classList.add('auth-section--signed-in');
            }
        })
        .catch(function(err) { console.error('Sign-in failed:', err); });
})();
"#;

const LIVE_BOARD_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function() {
    if (!window.EventSource) { return; }
    var list = document.getElementById('idea-list');
    var count = document.getElementById('idea-count');
    if (!list) { return; }

    function formatDate(iso) {
        var d = new Date(iso);
        return d.toLocaleDateString('en-US', { month: 'short', day: 'numeric', hour: '2-digit', minute: '2-digit' });
    }

    function card(idea) {
        var article = document.createElement('article');
        article.className = 'idea';
        article.dataset.ideaId = idea.id;
        var text = document.createElement('p');
        text.className = 'idea__text';
        text.textContent = idea.text;
        var footer = document.createElement('div');
        footer.className = 'idea__footer';
        var time = document.createElement('span');
        time.className = 'idea__time';
        time.textContent = formatDate(idea.createdAt);
        var form = document.createElement('form');
        form.className = 'idea__vote';
        form.method = 'post';
        form.action = '/board/upvote';
        var hidden = document.createElement('input');
        hidden.type = 'hidden';
        hidden.name = 'idea_id';
        hidden.value = idea.id;
        var button = document.createElement('button');
        button.type = 'submit';
        button.className = 'idea__upvote';
        button.title = 'Upvote';
        var arrow = document.createElement('span');
        arrow.className = 'idea__arrow';
        arrow.textContent = '▲';
        var votes = document.createElement('span');
        votes.className = 'idea__count';
        votes.textContent = idea.upvotes;
        button.append(arrow, votes);
        form.append(hidden, button);
        footer.append(time, form);
        article.append(text, footer);
        return article;
    }

    function emptyState() {
        var empty = document.createElement('div');
        empty.className = 'ideas__empty';
        var title = document.createElement('p');
        title.className = 'ideas__empty-title';
        title.textContent = 'No ideas yet';
        var hint = document.createElement('p');
        hint.textContent = 'Be the first to share a brilliant idea!';
        empty.append(title, hint);
        return empty;
    }

    var source = new EventSource('/v1/ideas/stream');
    source.onmessage = function(event) {
        var snapshot = JSON.parse(event.data);
        if (snapshot.ideas.length === 0) {
            list.replaceChildren(emptyState());
        } else {
            list.replaceChildren.apply(list, snapshot.ideas.map(card));
        }
        if (count) { count.textContent = snapshot.ideas.length; }
    };
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_keep_their_kind() {
        let err = ServerFnError::new(AppError::NotFound.to_string());
        assert_eq!(board_error(&err), AppError::NotFound);
    }

    #[test]
    fn live_updates_render_the_empty_board() {
        assert!(LIVE_BOARD_SCRIPT.contains("list.replaceChildren(emptyState())"));
        assert!(LIVE_BOARD_SCRIPT.contains("'ideas__empty'"));
        assert!(LIVE_BOARD_SCRIPT.contains("'No ideas yet'"));
    }

    #[test]
    fn unparseable_errors_become_internal() {
        let err = ServerFnError::new("boom");
        assert!(matches!(board_error(&err), AppError::Internal(_)));
    }
}
