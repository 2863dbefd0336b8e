//! Server side rendering of leptos views into complete html documents.

use leptos::{view, IntoView};

use crate::paths;
use crate::theme::Theme;

pub const STYLESHEET: &str = include_str!("../static/app.css");

/// renders a view tree to html, all dynamic text and attributes are escaped
pub fn render<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}

/// wraps a rendered body into a full document
pub fn document(title: &'static str, theme: Theme, body: String) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"pt-BR\" class=\"{theme}\">",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{title}</title>",
            "<link rel=\"stylesheet\" href=\"{stylesheet}\">",
            "</head>",
            "<body>{body}</body>",
            "</html>"
        ),
        theme = theme.as_str(),
        title = title,
        stylesheet = paths::STYLESHEET,
        body = body,
    )
}

pub fn error_page(message: String) -> String {
    let body = render(move || {
        view! {
            <main class="container error-page">
                <h1>{message}</h1>
                <a class="button" href={paths::HOME}>"Voltar ao início"</a>
            </main>
        }
    });

    document("PeladaFC", Theme::default(), body)
}
