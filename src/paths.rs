//! Every route the site renders or links to.

pub const HOME: &str = "/";
pub const GAMES: &str = "/peladas";
pub const GAME_CREATE: &str = "/peladas/create";
pub const PLAYERS: &str = "/players";
pub const RANKINGS: &str = "/rankings";
pub const PROFILE: &str = "/profile";
pub const SETTINGS: &str = "/settings";
pub const LOGIN: &str = "/auth/login";
pub const SIGN_UP: &str = "/auth/sign-up";
pub const SIGN_OUT: &str = "/auth/sign-out";
pub const THEME: &str = "/theme";
pub const STYLESHEET: &str = "/static/app.css";

pub fn game_detail(id: &str) -> String {
    format!("{}/{}", GAMES, id)
}

/// returns `target` when it points inside this site, otherwise the home route
///
/// protocol relative urls (`//host`) and backslash tricks are rejected as well
pub fn local_or_home(target: &str) -> &str {
    let is_local = target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.contains("://");

    if is_local {
        target
    } else {
        HOME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_detail_route() {
        assert_eq!(game_detail("42"), "/peladas/42");
    }

    #[test]
    fn only_local_targets_are_kept() {
        assert_eq!(local_or_home("/rankings"), "/rankings");
        assert_eq!(local_or_home("/peladas?menu=open"), "/peladas?menu=open");
        assert_eq!(local_or_home("https://evil.example"), "/");
        assert_eq!(local_or_home("//evil.example"), "/");
        assert_eq!(local_or_home("/\\evil.example"), "/");
        assert_eq!(local_or_home(""), "/");
    }
}
