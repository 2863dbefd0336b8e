use actix_identity::Identity;
use actix_web::web::{self, Data, Query};
use actix_web::{get, HttpRequest};
use chrono::Utc;
use leptos::view;

use crate::home::view::{Home, NotConfigured, PageContext};
use crate::home::{self, HomePage, TokenCheck};
use crate::navigation::NavQuery;
use crate::render::{document, render};
use crate::server::{Response, State};
use crate::theme::Theme;

#[get("/")]
async fn index(
    req: HttpRequest,
    state: Data<State>,
    id: Identity,
    query: Query<NavQuery>,
    theme: Theme,
) -> Response {
    let token = id.identity();
    let page = home::load(state.backend.as_deref(), token.as_deref(), Utc::now()).await;

    let body = match page {
        HomePage::NotConfigured => render(|| view! { <NotConfigured/> }),
        HomePage::Ready(model) => {
            if model.token == TokenCheck::Rejected {
                id.forget();
            }

            let context = PageContext {
                path: req.path().to_string(),
                panel: query.panel(),
                theme,
                offset: state.display_offset,
            };
            render(move || view! { <Home model=model context=context/> })
        }
    };

    http_ok_html!(document("PeladaFC", theme, body));
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
