use ideaboard_ui::App;
use leptos::prelude::*;
use leptos_meta::MetaTags;

pub const FAVICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>💡</text></svg>";

pub const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 720px; margin: 0 auto; padding: 1.5rem; }
.header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 0 2rem; }
.header__brand { display: flex; align-items: center; gap: 0.5rem; }
.header__logo { font-size: 1.75rem; }
.header__title { font-size: 1.5rem; color: var(--love); font-weight: 800; }
.auth-section__status { color: var(--muted); font-size: 0.9rem; }
.auth-section--signed-in .auth-section__status { color: var(--pine); }
.demo-banner {
    background: #fdf1dc; border: 2px solid var(--gold); border-radius: 8px;
    padding: 0.75rem 1rem; margin-bottom: 1.5rem; color: #8a5a12; font-size: 0.95rem;
}
.idea-form {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 12px; padding: 1.25rem; margin-bottom: 2rem;
}
.idea-form__title { font-size: 1.1rem; color: var(--pine); margin-bottom: 0.75rem; }
.idea-form__input {
    width: 100%; min-height: 5rem; padding: 0.75rem 1rem; border: 2px solid var(--overlay);
    border-radius: 8px; background: var(--base); color: var(--text); font: inherit; resize: vertical;
}
.idea-form__input:focus { outline: none; border-color: var(--pine); }
.idea-form__footer { display: flex; justify-content: space-between; align-items: center; margin-top: 0.75rem; }
.idea-form__counter { color: var(--muted); font-size: 0.85rem; }
.idea-form__counter--warn { color: var(--love); font-weight: 600; }
.idea-form__button {
    padding: 0.6rem 1.5rem; background: var(--love); color: var(--base);
    border: none; border-radius: 8px; font-weight: 600; cursor: pointer;
}
.idea-form__button:hover { opacity: 0.9; }
.idea-form__button:disabled { background: var(--muted); cursor: not-allowed; }
.ideas__title { font-size: 1.1rem; color: var(--subtle); margin-bottom: 1rem; }
.ideas__list { display: flex; flex-direction: column; gap: 0.75rem; }
.ideas__empty { text-align: center; padding: 2.5rem 1rem; color: var(--muted); }
.ideas__empty-title { font-weight: 700; color: var(--subtle); margin-bottom: 0.25rem; }
.idea {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 10px; padding: 1rem 1.25rem;
}
.idea__text { line-height: 1.6; white-space: pre-wrap; word-break: break-word; }
.idea__footer { display: flex; justify-content: space-between; align-items: center; margin-top: 0.75rem; }
.idea__time { color: var(--muted); font-size: 0.85rem; }
.idea__upvote {
    display: inline-flex; align-items: center; gap: 0.35rem; padding: 0.35rem 0.8rem;
    background: var(--base); border: 2px solid var(--overlay); border-radius: 999px;
    color: var(--pine); font-weight: 700; cursor: pointer;
}
.idea__upvote:hover { border-color: var(--pine); }
.idea__arrow { font-size: 0.8rem; }
.loading { display: flex; flex-direction: column; align-items: center; padding: 3rem; }
.loading__spinner {
    width: 40px; height: 40px; border: 4px solid var(--overlay);
    border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #8b3d4d; }
.error__retry {
    display: inline-block; margin-top: 1rem; padding: 0.5rem 1rem; background: var(--love);
    color: var(--base); border: none; border-radius: 4px; cursor: pointer; text-decoration: none;
}
"#;

const FORM_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function() {
    var form = document.querySelector('.idea-form');
    if (!form) { return; }
    var input = form.querySelector('.idea-form__input');
    var counter = form.querySelector('.idea-form__counter');
    var button = form.querySelector('.idea-form__button');
    var max = parseInt(input.getAttribute('maxlength'), 10);

    function update() {
        var length = Array.from(input.value).length;
        counter.textContent = length + '/' + max + ' characters';
        counter.classList.toggle('idea-form__counter--warn', length > max - 20);
        button.disabled = input.value.trim().length === 0 || length > max;
    }

    form.addEventListener('submit', function() {
        button.disabled = true;
        button.textContent = 'Sharing...';
    });
    input.addEventListener('input', update);
    update();
});
"#;

pub fn shell(_options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href=FAVICON/>
                <style>{CSS}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
                <script inner_html=FORM_SCRIPT></script>
            </body>
        </html>
    }
}

/// Standalone page for failed form posts.
pub fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Error - Idea Board</title>
    <link rel="icon" href="{FAVICON}">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="error">
            <p class="error__title">Something went wrong</p>
            <p class="error__message">{message}</p>
            <a href="/" class="error__retry">Back to the board</a>
        </div>
    </main>
</body>
</html>"#,
        message = escape_html(message),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_escapes_the_message() {
        let page = render_error_page("<script>alert('x')</script>");
        assert!(page.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(!page.contains("<script>alert"));
    }
}
