//! In-memory backend for handler and aggregator tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use futures::future::{self, BoxFuture, FutureExt};

use crate::backend::{DataService, SessionService};
use crate::errors::ServiceError;
use crate::games::{Creator, Game, ParticipantCount, Status};
use crate::users::{AuthUser, Profile, UserMetadata};

pub const TOKEN: &str = "valid-token";
pub const EMAIL: &str = "joao@example.com";
pub const PASSWORD: &str = "hunter2boogaloo";

#[derive(Debug, Default)]
pub struct FakeBackend {
    pub user: Option<AuthUser>,
    pub profile: Option<Profile>,
    pub games: Vec<Game>,
    pub players: Vec<Profile>,
    pub fail_identity: bool,
    pub fail_profile: bool,
    pub fail_games: bool,
    pub fail_players: bool,
    pub calls: AtomicUsize,
    pub signed_out: Mutex<Vec<String>>,
    /// the token each data query ran with, in call order
    pub data_tokens: Mutex<Vec<Option<String>>>,
}

impl FakeBackend {
    /// a backend where `TOKEN` belongs to João
    pub fn with_user() -> Self {
        FakeBackend {
            user: Some(user()),
            profile: Some(profile("u-1", "João", Some(4.7))),
            ..FakeBackend::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn record_token(&self, token: Option<&str>) {
        if let Ok(mut tokens) = self.data_tokens.lock() {
            tokens.push(token.map(String::from));
        }
    }

    pub fn data_tokens(&self) -> Vec<Option<String>> {
        self.data_tokens
            .lock()
            .map(|tokens| tokens.clone())
            .unwrap_or_default()
    }

    fn reply<T: Send + 'static>(
        &self,
        fail: bool,
        value: T,
    ) -> BoxFuture<'static, Result<T, ServiceError>> {
        self.record();
        let result = if fail {
            Err(ServiceError::InternalServerError)
        } else {
            Ok(value)
        };
        future::ready(result).boxed()
    }
}

impl SessionService for FakeBackend {
    fn current_user<'a>(
        &'a self,
        token: &'a str,
    ) -> BoxFuture<'a, Result<Option<AuthUser>, ServiceError>> {
        let user = self.user.clone().filter(|_| token == TOKEN);
        self.reply(self.fail_identity, user)
    }

    fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<String, ServiceError>> {
        self.record();
        let result = if email == EMAIL && password == PASSWORD {
            Ok(String::from(TOKEN))
        } else {
            Err(ServiceError::Unauthorized(String::from(
                "Invalid login credentials",
            )))
        };
        future::ready(result).boxed()
    }

    fn sign_out<'a>(&'a self, token: &'a str) -> BoxFuture<'a, Result<(), ServiceError>> {
        if let Ok(mut signed_out) = self.signed_out.lock() {
            signed_out.push(token.to_string());
        }
        self.reply(false, ())
    }
}

impl DataService for FakeBackend {
    fn profile<'a>(
        &'a self,
        user_id: &'a str,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Option<Profile>, ServiceError>> {
        self.record_token(token);
        let profile = self.profile.clone().filter(|p| p.id == user_id);
        self.reply(self.fail_profile, profile)
    }

    /// hands back every stored game untouched, like a backend ignoring the query
    fn upcoming_games<'a>(
        &'a self,
        _now: DateTime<Utc>,
        _limit: usize,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<Game>, ServiceError>> {
        self.record_token(token);
        self.reply(self.fail_games, self.games.clone())
    }

    fn top_players<'a>(
        &'a self,
        _limit: usize,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<Profile>, ServiceError>> {
        self.record_token(token);
        self.reply(self.fail_players, self.players.clone())
    }
}

pub fn user() -> AuthUser {
    AuthUser {
        id: String::from("u-1"),
        email: Some(String::from(EMAIL)),
        user_metadata: UserMetadata::default(),
    }
}

pub fn profile(id: &str, name: &str, rating: Option<f64>) -> Profile {
    Profile {
        id: id.to_string(),
        name: Some(name.to_string()),
        avatar_url: None,
        rating,
        games_played: 10,
        goals: 3,
    }
}

/// an open game starting `hours` from `now`
pub fn game(id: &str, now: DateTime<Utc>, hours: i64, participants: Option<i64>) -> Game {
    Game {
        id: id.to_string(),
        title: format!("Pelada {}", id),
        description: Some(String::from("Society")),
        status: Status::Open,
        date_time: now + Duration::hours(hours),
        location: Some(String::from("Arena Zona Sul")),
        max_players: 12,
        creator: Some(Creator {
            name: Some(String::from("Carlos")),
            avatar_url: None,
        }),
        participants: participants
            .map(|count| vec![ParticipantCount { count }])
            .unwrap_or_default(),
    }
}
