use crate::backend::decode;

/// A user as the identity service knows it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// free form data the identity service keeps next to the account
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserMetadata {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

/// A row of the `profiles` table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    #[serde(deserialize_with = "decode::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "decode::null_as_default")]
    pub games_played: i64,
    #[serde(default, deserialize_with = "decode::null_as_default")]
    pub goals: i64,
}

/// The requester of the current page
///
/// An anonymous viewer has no profile at all, so nothing downstream can read
/// profile fields without first matching on `Authenticated`.
#[derive(Debug, Clone, PartialEq)]
pub enum Viewer {
    Anonymous,
    Authenticated {
        identity: AuthUser,
        /// `None` when the profile row is missing or couldn't be loaded
        profile: Option<Profile>,
    },
}

/// What the navigation bar needs to know about the signed in user
#[derive(Debug, Clone, PartialEq)]
pub struct NavUser {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl Profile {
    /// rating with a single decimal, "0.0" for unrated players
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating.unwrap_or(0.0))
    }

    pub fn stats_label(&self) -> String {
        format!("{} jogos • {} gols", self.games_played, self.goals)
    }
}

impl Viewer {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::Authenticated { .. })
    }

    /// merges the identity with its profile, profile fields take precedence
    pub fn nav_user(&self) -> Option<NavUser> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Authenticated { identity, profile } => {
                let profile = profile.as_ref();

                Some(NavUser {
                    id: identity.id.clone(),
                    email: identity.email.clone(),
                    name: profile
                        .and_then(|p| p.name.clone())
                        .or_else(|| identity.user_metadata.name.clone()),
                    avatar_url: profile
                        .and_then(|p| p.avatar_url.clone())
                        .or_else(|| identity.user_metadata.avatar_url.clone()),
                })
            }
        }
    }
}

impl NavUser {
    /// the letter shown when there's no avatar picture
    pub fn initial(&self) -> String {
        self.name
            .as_deref()
            .and_then(first_letter)
            .or_else(|| self.email.as_deref().and_then(first_letter))
            .map(|letter| letter.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// first character of a non-empty name
pub fn first_letter(name: &str) -> Option<char> {
    name.trim().chars().next()
}
