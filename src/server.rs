use std::fmt;
use std::sync::Arc;

use actix_identity::{CookieIdentityPolicy, IdentityService};
use actix_web::cookie::SameSite;
use actix_web::{get, middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web_opentelemetry::RequestTracing;
use chrono::FixedOffset;

use crate::auth;
use crate::backend::Backend;
use crate::config::Config;
use crate::errors::ServiceError;
use crate::home;
use crate::render;
use crate::theme;

pub type Response = Result<HttpResponse, ServiceError>;

/// name of the cookie holding the session token
pub const SESSION_COOKIE: &str = "peladafc";

pub struct State {
    /// `None` when the backend integration isn't configured
    pub backend: Option<Arc<dyn Backend>>,
    pub display_offset: FixedOffset,
}

impl State {
    pub fn new(backend: Option<Arc<dyn Backend>>) -> Self {
        State {
            backend,
            display_offset: Config::display_offset(),
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("configured", &self.backend.is_some())
            .field("display_offset", &self.display_offset)
            .finish()
    }
}

#[get("/health")]
async fn health(_: HttpRequest) -> &'static str {
    "ok"
}

#[get("/static/app.css")]
async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(render::STYLESHEET)
}

/// cookie based sessions, the cookie only carries the backend token
pub fn identity_service(key: &[u8], secure: bool) -> IdentityService<CookieIdentityPolicy> {
    IdentityService::new(
        CookieIdentityPolicy::new(key)
            .name(SESSION_COOKIE)
            .path("/")
            .secure(secure)
            .same_site(SameSite::Lax),
    )
}

pub async fn launch(state: State) -> std::io::Result<()> {
    let state = web::Data::new(state);
    let session_private_key = Config::session_private_key();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::DefaultHeaders::new().header("X-Version", env!("CARGO_PKG_VERSION")))
            .wrap(middleware::Logger::default())
            .wrap(RequestTracing::new())
            .wrap(identity_service(
                session_private_key.as_bytes(),
                Config::secure_cookies(),
            ))
            // limit the maximum amount of data that server will accept
            .app_data(web::FormConfig::default().limit(4096))
            .service(health)
            .service(stylesheet)
            .configure(home::routes::register)
            .configure(auth::routes::register)
            .configure(theme::register)
    })
    .bind(format!("{}:{}", Config::api_host(), Config::api_port()))?
    .run()
    .await
}
