//! The landing page: who is looking, which games are coming up and who the
//! best rated players are.

pub mod routes;
pub mod view;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing_futures::Instrument;

use crate::backend::Backend;
use crate::games::Game;
use crate::users::{Profile, Viewer};

/// maximum amount of upcoming games on the home page
pub const MAX_GAMES: usize = 6;
/// maximum amount of ranked players on the home page
pub const MAX_PLAYERS: usize = 5;
/// only the podium gets a rank badge
const BADGED_RANKS: usize = 3;

/// Data for one section of a page
///
/// Keeps "the backend failed" apart from "there is nothing to show", neither
/// of them renders the section.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Loaded(Vec<T>),
    Unavailable,
}

impl<T> Section<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Section::Loaded(items) => items,
            Section::Unavailable => &[],
        }
    }

    /// true when there is at least one item to render
    pub fn is_visible(&self) -> bool {
        !self.items().is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Section::Loaded(items) => items,
            Section::Unavailable => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    /// 1, 2 or 3 for the podium
    pub badge: Option<usize>,
    pub profile: Profile,
}

/// What became of the session token sent with the request
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenCheck {
    /// no token was sent
    Missing,
    Accepted,
    /// expired or revoked, the cookie holding it should be forgotten
    Rejected,
    /// the identity service couldn't be asked, the token may still be good
    Unverified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeModel {
    pub viewer: Viewer,
    pub token: TokenCheck,
    pub games: Section<Game>,
    pub top_players: Section<RankedPlayer>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HomePage {
    /// the backend integration isn't set up, nothing was queried
    NotConfigured,
    Ready(HomeModel),
}

/// Builds the home page for the holder of `token`
///
/// Backend failures never fail the page: the viewer degrades to anonymous and
/// data sections become `Unavailable`. The listings run as the viewer only once
/// the identity service accepted the token.
pub async fn load(
    backend: Option<&dyn Backend>,
    token: Option<&str>,
    now: DateTime<Utc>,
) -> HomePage {
    let backend = match backend {
        Some(backend) => backend,
        None => return HomePage::NotConfigured,
    };

    let (viewer, check) = resolve_viewer(backend, token)
        .instrument(tracing::info_span!("home.viewer"))
        .await;
    let token = token.filter(|_| check == TokenCheck::Accepted);

    let games = match backend.upcoming_games(now, MAX_GAMES, token).await {
        Ok(games) => Section::Loaded(upcoming(games, now)),
        Err(e) => {
            error!("unable to load upcoming games: {}", e);
            Section::Unavailable
        }
    };

    let top_players = match backend.top_players(MAX_PLAYERS, token).await {
        Ok(players) => Section::Loaded(ranking(players)),
        Err(e) => {
            error!("unable to load top players: {}", e);
            Section::Unavailable
        }
    };

    HomePage::Ready(HomeModel {
        viewer,
        token: check,
        games,
        top_players,
    })
}

/// the identity behind a session token merged with its profile
pub async fn resolve_viewer(backend: &dyn Backend, token: Option<&str>) -> (Viewer, TokenCheck) {
    let token = match token {
        Some(token) => token,
        None => return (Viewer::Anonymous, TokenCheck::Missing),
    };

    let identity = match backend.current_user(token).await {
        Ok(Some(identity)) => identity,
        Ok(None) => {
            debug!("session token was rejected, continuing anonymously");
            return (Viewer::Anonymous, TokenCheck::Rejected);
        }
        Err(e) => {
            warn!("unable to resolve the session user, continuing anonymously: {}", e);
            return (Viewer::Anonymous, TokenCheck::Unverified);
        }
    };

    let profile = match backend.profile(&identity.id, Some(token)).await {
        Ok(profile) => profile,
        Err(e) => {
            error!("unable to load profile {}: {}", identity.id, e);
            None
        }
    };

    (Viewer::Authenticated { identity, profile }, TokenCheck::Accepted)
}

/// open games that haven't started, soonest first
pub fn upcoming(mut games: Vec<Game>, now: DateTime<Utc>) -> Vec<Game> {
    games.retain(|game| game.is_upcoming(now));
    games.sort_by_key(|game| game.date_time);
    games.truncate(MAX_GAMES);
    games
}

/// best rated first, unrated players count as 0
pub fn ranking(mut players: Vec<Profile>) -> Vec<RankedPlayer> {
    players.sort_by(|a, b| compare_ratings(b.rating, a.rating));
    players.truncate(MAX_PLAYERS);

    players
        .into_iter()
        .enumerate()
        .map(|(index, profile)| RankedPlayer {
            badge: if index < BADGED_RANKS {
                Some(index + 1)
            } else {
                None
            },
            profile,
        })
        .collect()
}

fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}
