use actix_identity::Identity;
use actix_web::web::{self, Data, Form};
use actix_web::{get, post, HttpResponse};
use leptos::view;

use crate::auth::view::LoginForm;
use crate::auth::Credentials;
use crate::errors::ServiceError;
use crate::paths;
use crate::render::{document, render};
use crate::server::{Response, State};
use crate::theme::Theme;
use crate::validator::Validate;

fn login_page(
    theme: Theme,
    error: Option<String>,
    invalid: Option<&'static str>,
    email: String,
) -> String {
    let body = render(move || view! { <LoginForm error=error invalid=invalid email=email/> });
    document("Entrar | PeladaFC", theme, body)
}

#[get("/auth/login")]
async fn login_form(theme: Theme) -> Response {
    http_ok_html!(login_page(theme, None, None, String::new()));
}

#[post("/auth/login")]
async fn login(
    credentials: Result<Form<Credentials>, actix_web::Error>,
    state: Data<State>,
    id: Identity,
    theme: Theme,
) -> Response {
    let credentials = match credentials {
        Ok(credentials) => credentials.into_inner(),
        Err(e) => {
            warn!("unreadable login submission: {}", e);
            let error = ServiceError::BadRequest(String::from(
                "Não foi possível ler o formulário, tente novamente",
            ));
            return Ok(HttpResponse::BadRequest()
                .content_type("text/html; charset=utf-8")
                .body(login_page(theme, Some(error.user_message()), None, String::new())));
        }
    };
    let email = credentials.email.trim().to_string();

    let backend = match state.backend.as_deref() {
        Some(backend) => backend,
        None => {
            let error = ServiceError::NotConfigured;
            http_ok_html!(login_page(theme, Some(error.user_message()), None, email));
        }
    };

    if let Err(invalid) = credentials.validate() {
        debug!("login form rejected: {} {}", invalid.field, invalid.message);
        let error = ServiceError::from(invalid);
        http_ok_html!(login_page(theme, Some(error.user_message()), Some(invalid.field), email));
    }

    match backend.sign_in(&email, &credentials.password).await {
        Ok(token) => {
            id.remember(token);
            http_see_other!(paths::HOME);
        }
        Err(e) => {
            info!("sign in failed: {}", e);
            http_ok_html!(login_page(theme, Some(e.user_message()), None, email));
        }
    }
}

#[post("/auth/sign-out")]
async fn sign_out(state: Data<State>, id: Identity) -> Response {
    if let (Some(backend), Some(token)) = (state.backend.as_deref(), id.identity()) {
        if let Err(e) = backend.sign_out(&token).await {
            warn!("unable to terminate the backend session: {}", e);
        }
    }

    id.forget();

    http_see_other!(paths::HOME);
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form);
    cfg.service(login);
    cfg.service(sign_out);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::backend::fake::{self, FakeBackend};
    use crate::home;
    use crate::render::tests::strip_markers;
    use crate::server::tests::{identity, shared, state};
    use crate::server::SESSION_COOKIE;
    use actix_web::cookie::Cookie;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    fn session_cookie(resp: &ServiceResponse) -> Option<Cookie<'static>> {
        resp.response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.into_owned())
    }

    async fn body(resp: ServiceResponse) -> String {
        strip_markers(&String::from_utf8(test::read_body(resp).await.to_vec()).unwrap())
    }

    #[actix_rt::test]
    async fn login_form_renders() {
        let mut app = test::init_service(
            App::new()
                .data(state(None))
                .wrap(identity())
                .configure(register),
        )
        .await;

        let req = test::TestRequest::get().uri("/auth/login").to_request();
        let resp = test::call_service(&mut app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let html = body(resp).await;
        assert!(html.contains("Bem-vindo de volta!"));
        assert!(html.contains("id=\"login-pending\""));
    }

    #[actix_rt::test]
    async fn successful_login_reaches_the_home_page() {
        let mut app = test::init_service(
            App::new()
                .data(state(Some(FakeBackend::with_user())))
                .wrap(identity())
                .configure(register)
                .configure(home::routes::register),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_form(&[("email", fake::EMAIL), ("password", fake::PASSWORD)])
            .to_request();
        let resp = test::call_service(&mut app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        let cookie = session_cookie(&resp).expect("session cookie should be set");

        let req = test::TestRequest::get().uri("/").cookie(cookie).to_request();
        let html = body(test::call_service(&mut app, req).await).await;

        assert!(html.contains("identity-menu"));
        assert!(html.contains("Criar Nova Pelada"));
        assert!(!html.contains("href=\"/auth/login\""));
    }

    #[actix_rt::test]
    async fn rejected_credentials_show_the_backend_message() {
        let mut app = test::init_service(
            App::new()
                .data(state(Some(FakeBackend::with_user())))
                .wrap(identity())
                .configure(register),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_form(&[("email", fake::EMAIL), ("password", "wrong")])
            .to_request();
        let resp = test::call_service(&mut app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(session_cookie(&resp).is_none());
        let html = body(resp).await;
        assert!(html.contains("Invalid login credentials"));
        assert!(html.contains("value=\"joao@example.com\""));
    }

    #[actix_rt::test]
    async fn malformed_input_never_reaches_the_backend() {
        let backend = Arc::new(FakeBackend::with_user());
        let mut app = test::init_service(
            App::new()
                .data(shared(Some(backend.clone())))
                .wrap(identity())
                .configure(register),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_form(&[("email", "joao"), ("password", "secret")])
            .to_request();
        let html = body(test::call_service(&mut app, req).await).await;

        assert!(html.contains("Informe um email válido"));
        assert!(html.contains("aria-invalid=\"true\""));
        assert_eq!(backend.calls(), 0);
    }

    #[actix_rt::test]
    async fn unreadable_submission_gets_the_form_back() {
        let backend = Arc::new(FakeBackend::with_user());
        let mut app = test::init_service(
            App::new()
                .data(shared(Some(backend.clone())))
                .wrap(identity())
                .configure(register),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(&serde_json::json!({ "email": fake::EMAIL, "password": fake::PASSWORD }))
            .to_request();
        let resp = test::call_service(&mut app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        let html = body(resp).await;
        assert!(html.contains("Não foi possível ler o formulário"));
        assert!(html.contains("action=\"/auth/login\""));
        assert_eq!(backend.calls(), 0);
    }

    #[actix_rt::test]
    async fn unconfigured_backend_explains_itself() {
        let mut app = test::init_service(
            App::new()
                .data(state(None))
                .wrap(identity())
                .configure(register),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_form(&[("email", fake::EMAIL), ("password", fake::PASSWORD)])
            .to_request();
        let html = body(test::call_service(&mut app, req).await).await;

        assert!(html.contains("Connect Supabase to get started"));
    }

    #[actix_rt::test]
    async fn sign_out_ends_the_session() {
        let backend = Arc::new(FakeBackend::with_user());
        let mut app = test::init_service(
            App::new()
                .data(shared(Some(backend.clone())))
                .wrap(identity())
                .configure(register),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_form(&[("email", fake::EMAIL), ("password", fake::PASSWORD)])
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        let cookie = session_cookie(&resp).expect("session cookie should be set");

        let req = test::TestRequest::post()
            .uri("/auth/sign-out")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&mut app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        let removed = session_cookie(&resp).expect("session cookie should be cleared");
        assert_eq!(removed.value(), "");
        assert_eq!(*backend.signed_out.lock().unwrap(), vec![fake::TOKEN.to_string()]);
    }
}
