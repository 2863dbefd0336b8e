use chrono::{DateTime, FixedOffset, Utc};

use crate::backend::decode;
use crate::paths;
use crate::users::first_letter;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    #[serde(other)]
    Closed,
}

impl Default for Status {
    fn default() -> Self {
        Status::Closed
    }
}

/// A pelada as listed by the data service, joined with its creator and
/// the number of participants
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Game {
    #[serde(deserialize_with = "decode::id")]
    pub id: String,
    #[serde(default, deserialize_with = "decode::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "decode::null_as_default")]
    pub status: Status,
    pub date_time: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "decode::null_as_default")]
    pub max_players: i32,
    #[serde(default)]
    pub creator: Option<Creator>,
    /// aggregate join, holds at most one row with the count
    #[serde(default, deserialize_with = "decode::null_as_default")]
    pub participants: Vec<ParticipantCount>,
}

/// the subset of the creator's profile that's joined on a listing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Creator {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ParticipantCount {
    #[serde(default, deserialize_with = "decode::null_as_default")]
    pub count: i64,
}

impl Game {
    /// defaults to 0 when the join returned no rows
    pub fn participant_count(&self) -> i64 {
        self.participants.first().map(|row| row.count).unwrap_or(0)
    }

    pub fn participants_label(&self) -> String {
        format!("{}/{}", self.participant_count(), self.max_players)
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            Status::Open => "Aberta",
            Status::Closed => "Fechada",
        }
    }

    /// open and not started yet
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.status == Status::Open && self.date_time >= now
    }

    /// day, month and time in the given timezone, e.g. "16/10, 19:30"
    pub fn starts_at_label(&self, offset: &FixedOffset) -> String {
        self.date_time
            .with_timezone(offset)
            .format("%d/%m, %H:%M")
            .to_string()
    }

    pub fn detail_href(&self) -> String {
        paths::game_detail(&self.id)
    }

    pub fn creator_name(&self) -> Option<&str> {
        self.creator.as_ref().and_then(|c| c.name.as_deref())
    }

    pub fn creator_initial(&self) -> String {
        self.creator_name()
            .and_then(first_letter)
            .map(String::from)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const LISTING: &str = r#"{
        "id": "7b0c",
        "title": "Pelada de quinta",
        "description": "Society, traga colete",
        "status": "open",
        "date_time": "2026-10-22T22:30:00+00:00",
        "location": "Arena Zona Sul",
        "max_players": 14,
        "creator_id": "u-9",
        "creator": { "name": "Carlos", "avatar_url": null },
        "participants": [{ "count": 9 }]
    }"#;

    fn listing() -> Game {
        serde_json::from_str(LISTING).unwrap()
    }

    #[test]
    fn decodes_joined_listing() {
        let game = listing();

        assert_eq!(game.status, Status::Open);
        assert_eq!(game.participants_label(), "9/14");
        assert_eq!(game.creator_name(), Some("Carlos"));
        assert_eq!(game.creator_initial(), "C");
        assert_eq!(game.detail_href(), "/peladas/7b0c");
    }

    #[test]
    fn missing_participants_count_as_zero() {
        let mut game = listing();
        game.participants.clear();

        assert_eq!(game.participant_count(), 0);
        assert_eq!(game.participants_label(), "0/14");
    }

    #[test]
    fn null_columns_fall_back_to_defaults() {
        let game: Game = serde_json::from_str(
            r#"{
                "id": 31,
                "title": null,
                "description": null,
                "status": null,
                "date_time": "2026-10-22T22:30:00+00:00",
                "location": null,
                "max_players": null,
                "creator": null,
                "participants": null
            }"#,
        )
        .unwrap();

        assert_eq!(game.detail_href(), "/peladas/31");
        assert_eq!(game.title, "");
        assert_eq!(game.status, Status::Closed);
        assert_eq!(game.participants_label(), "0/0");
        assert_eq!(game.creator_initial(), "");
    }

    #[test]
    fn one_bad_row_does_not_sink_the_listing() {
        let rows = format!(
            "[{},{}]",
            LISTING,
            LISTING.replace("\"max_players\": 14", "\"max_players\": null")
        );

        let games: Vec<Game> = serde_json::from_str(&rows).unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[1].participants_label(), "9/0");
    }

    #[test]
    fn unknown_status_is_closed() {
        let game: Game =
            serde_json::from_str(&LISTING.replace("\"open\"", "\"cancelled\"")).unwrap();

        assert_eq!(game.status, Status::Closed);
        assert_eq!(game.status_label(), "Fechada");
    }

    #[test]
    fn start_time_in_display_timezone() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();

        assert_eq!(listing().starts_at_label(&brasilia), "22/10, 19:30");
    }

    #[test]
    fn upcoming_requires_open_and_future() {
        let game = listing();
        let before = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap();

        assert!(game.is_upcoming(before));
        assert!(game.is_upcoming(game.date_time));
        assert!(!game.is_upcoming(after));

        let closed = Game {
            status: Status::Closed,
            ..game
        };
        assert!(!closed.is_upcoming(before));
    }
}
