use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::web::{self, Form};
use actix_web::{post, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures::future::{ok, Ready};

use crate::paths;
use crate::server::Response;

pub const THEME_COOKIE: &str = "theme";

/// Color scheme of the rendered pages, read from a cookie on every request
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn from_cookie(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// label of the button switching away from this theme
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Tema escuro",
            Theme::Dark => "Tema claro",
        }
    }

    fn cookie(self) -> Cookie<'static> {
        Cookie::build(THEME_COOKIE, self.as_str())
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(365))
            .finish()
    }
}

impl FromRequest for Theme {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;
    type Config = ();

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let cookie = req.cookie(THEME_COOKIE);
        ok(Theme::from_cookie(cookie.as_ref().map(|c| c.value())))
    }
}

#[derive(Deserialize)]
struct ThemeForm {
    /// the page to return to
    redirect: Option<String>,
}

#[post("/theme")]
async fn toggle(form: Form<ThemeForm>, theme: Theme) -> Response {
    let next = theme.toggled();
    let redirect = form.redirect.as_deref().unwrap_or(paths::HOME);

    debug!("switching to the {} theme", next.as_str());

    Ok(HttpResponse::SeeOther()
        .header(header::LOCATION, paths::local_or_home(redirect))
        .cookie(next.cookie())
        .finish())
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(toggle);
}
