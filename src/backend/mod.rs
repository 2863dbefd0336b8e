//! The hosted services the pages read from.
//!
//! Both services are traits so handlers can run against the real backend or an
//! in-memory one in tests.

pub mod decode;
#[cfg(test)]
pub mod fake;
pub mod supabase;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;

use crate::errors::ServiceError;
use crate::games::Game;
use crate::users::{AuthUser, Profile};

pub use supabase::Client;

/// The identity and session side of the backend
pub trait SessionService {
    /// resolves the user a session token belongs to, `None` when the token is
    /// expired or otherwise rejected
    fn current_user<'a>(
        &'a self,
        token: &'a str,
    ) -> BoxFuture<'a, Result<Option<AuthUser>, ServiceError>>;

    /// exchanges credentials for a session token, rejected credentials are
    /// reported as `ServiceError::Unauthorized` carrying the backend's message
    fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<String, ServiceError>>;

    /// terminates the session a token belongs to
    fn sign_out<'a>(&'a self, token: &'a str) -> BoxFuture<'a, Result<(), ServiceError>>;
}

/// The relational side of the backend
///
/// `token` is the viewer's session token. Queries run on behalf of that user
/// when it is given and as the anonymous role otherwise, so row level security
/// applies the same way it does for the browser.
pub trait DataService {
    fn profile<'a>(
        &'a self,
        user_id: &'a str,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Option<Profile>, ServiceError>>;

    /// open games starting at or after `now`, soonest first
    fn upcoming_games<'a>(
        &'a self,
        now: DateTime<Utc>,
        limit: usize,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<Game>, ServiceError>>;

    /// profiles with the highest rating first
    fn top_players<'a>(
        &'a self,
        limit: usize,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<Profile>, ServiceError>>;
}

/// Everything a page handler needs from the backend
pub trait Backend: SessionService + DataService + Send + Sync {}

impl<T> Backend for T where T: SessionService + DataService + Send + Sync {}
