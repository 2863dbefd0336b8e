use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::{BoxFuture, FutureExt};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing_futures::Instrument;
use url::Url;

use crate::backend::{DataService, SessionService};
use crate::config::Supabase;
use crate::errors::ServiceError;
use crate::games::Game;
use crate::users::{AuthUser, Profile};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// the listing joins, the creator's name/avatar and the participant count
const GAME_LISTING_SELECT: &str = "*,creator:profiles!peladas_creator_id_fkey(name,avatar_url),participants:pelada_participants(count)";

/// HTTP client for the auth and PostgREST endpoints of a Supabase project
#[derive(Debug, Clone)]
pub struct Client {
    base: Url,
    anon_key: String,
    reqwest: reqwest::Client,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// the auth api has used a few shapes for its errors over time
#[derive(Deserialize, Default, Debug)]
struct AuthErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl AuthErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .filter(|message| !message.trim().is_empty())
    }
}

impl Client {
    pub fn new(config: &Supabase) -> Result<Self, ServiceError> {
        let mut base = config.url.clone();
        // joining relative paths replaces the last segment unless it ends with a slash
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Client {
            base,
            anon_key: config.anon_key.clone(),
            reqwest: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        Ok(self.base.join(path)?)
    }

    /// runs a read against a PostgREST table, as the token's user when given
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<Vec<T>, ServiceError> {
        let rows = self
            .reqwest
            .get(self.endpoint(&format!("rest/v1/{}", table))?)
            .header("apikey", self.anon_key.as_str())
            .bearer_auth(token.unwrap_or(&self.anon_key))
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;

        Ok(rows)
    }

    fn profile_query(user_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("select", String::from("*")),
            ("id", format!("eq.{}", user_id)),
            ("limit", String::from("1")),
        ]
    }

    fn upcoming_games_query(now: DateTime<Utc>, limit: usize) -> Vec<(&'static str, String)> {
        vec![
            ("select", String::from(GAME_LISTING_SELECT)),
            ("status", String::from("eq.open")),
            (
                "date_time",
                format!("gte.{}", now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ),
            ("order", String::from("date_time.asc")),
            ("limit", limit.to_string()),
        ]
    }

    /// postgres sorts nulls first on descending orders, unrated players go last here
    fn top_players_query(limit: usize) -> Vec<(&'static str, String)> {
        vec![
            ("select", String::from("*")),
            ("order", String::from("rating.desc.nullslast")),
            ("limit", limit.to_string()),
        ]
    }
}

impl SessionService for Client {
    fn current_user<'a>(
        &'a self,
        token: &'a str,
    ) -> BoxFuture<'a, Result<Option<AuthUser>, ServiceError>> {
        async move {
            let response = self
                .reqwest
                .get(self.endpoint("auth/v1/user")?)
                .header("apikey", self.anon_key.as_str())
                .bearer_auth(token)
                .send()
                .await?;

            match response.status() {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    debug!("session token was rejected");
                    Ok(None)
                }
                status if status.is_success() => Ok(Some(response.json::<AuthUser>().await?)),
                status => {
                    error!("unexpected status {} while resolving the session user", status);
                    Err(ServiceError::InternalServerError)
                }
            }
        }
        .instrument(tracing::info_span!("supabase.current_user"))
        .boxed()
    }

    fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<String, ServiceError>> {
        async move {
            let response = self
                .reqwest
                .post(self.endpoint("auth/v1/token")?)
                .query(&[("grant_type", "password")])
                .header("apikey", self.anon_key.as_str())
                .json(&PasswordGrant { email, password })
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                let token = response.json::<TokenResponse>().await?;
                return Ok(token.access_token);
            }

            if status.is_client_error() {
                let body = response.json::<AuthErrorBody>().await.unwrap_or_default();
                let message = body
                    .into_message()
                    .unwrap_or_else(|| String::from("Invalid login credentials"));
                info!("sign in rejected: {}", message);
                return Err(ServiceError::Unauthorized(message));
            }

            error!("unexpected status {} while signing in", status);
            Err(ServiceError::InternalServerError)
        }
        .instrument(tracing::info_span!("supabase.sign_in"))
        .boxed()
    }

    fn sign_out<'a>(&'a self, token: &'a str) -> BoxFuture<'a, Result<(), ServiceError>> {
        async move {
            let response = self
                .reqwest
                .post(self.endpoint("auth/v1/logout")?)
                .header("apikey", self.anon_key.as_str())
                .bearer_auth(token)
                .send()
                .await?;

            match response.status() {
                // the session is already gone
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(()),
                status if status.is_success() => Ok(()),
                status => {
                    error!("unexpected status {} while signing out", status);
                    Err(ServiceError::InternalServerError)
                }
            }
        }
        .instrument(tracing::info_span!("supabase.sign_out"))
        .boxed()
    }
}

impl DataService for Client {
    fn profile<'a>(
        &'a self,
        user_id: &'a str,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Option<Profile>, ServiceError>> {
        async move {
            let profiles: Vec<Profile> = self
                .select("profiles", &Client::profile_query(user_id), token)
                .await?;

            Ok(profiles.into_iter().next())
        }
        .instrument(tracing::info_span!("supabase.profile"))
        .boxed()
    }

    fn upcoming_games<'a>(
        &'a self,
        now: DateTime<Utc>,
        limit: usize,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<Game>, ServiceError>> {
        async move {
            self.select::<Game>("peladas", &Client::upcoming_games_query(now, limit), token)
                .await
        }
        .instrument(tracing::info_span!("supabase.upcoming_games"))
        .boxed()
    }

    fn top_players<'a>(
        &'a self,
        limit: usize,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<Profile>, ServiceError>> {
        async move {
            self.select::<Profile>("profiles", &Client::top_players_query(limit), token)
                .await
        }
        .instrument(tracing::info_span!("supabase.top_players"))
        .boxed()
    }
}
