use serde::{Deserialize, Serialize};

use crate::scoring::{translate_events, MatchEvents, PlayerEntry, Role};

/// Rating used for players the sheet marks as unrated ("SV").
pub const FALLBACK_RATING: f64 = 6.0;

/// A match sheet: both lineups for one match.
///
/// Example YAML:
/// ```yaml
/// home:
///   name: Dynamo
///   players:
///     - { name: Rossi, role: P, rating: 6, events: { goals_conceded: 0 } }
///     - { name: Verdi, role: A, rating: "6*" }
/// away:
///   name: Rovers
///   players: []
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatchSheet {
    pub home: TeamSheet,
    pub away: TeamSheet,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TeamSheet {
    pub name: String,
    pub players: Vec<PlayerSheet>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlayerSheet {
    pub name: String,
    pub role: Role,

    /// Number, numeric string, or a string with a trailing `*` for unrated players
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingCell>,

    /// Manual override; wins over `events` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_malus: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<MatchEvents>,
}

/// Raw rating cell as written in the sheet.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RatingCell {
    Number(f64),
    Text(String),
}

/// A rating after interpreting the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedRating {
    pub value: f64,
    /// Player had no official rating ("SV", senza voto)
    pub unrated: bool,
}

impl RatingCell {
    pub fn parse(&self) -> ParsedRating {
        match self {
            RatingCell::Number(value) => ParsedRating {
                value: *value,
                unrated: false,
            },
            RatingCell::Text(text) => {
                let text = text.trim();
                let (number, starred) = match text.strip_suffix('*') {
                    Some(rest) => (rest.trim(), true),
                    None => (text, false),
                };
                match number.replace(',', ".").parse::<f64>() {
                    Ok(value) => ParsedRating {
                        value,
                        unrated: starred,
                    },
                    Err(_) => ParsedRating {
                        value: FALLBACK_RATING,
                        unrated: true,
                    },
                }
            }
        }
    }
}

impl PlayerSheet {
    pub fn rating(&self) -> ParsedRating {
        match &self.rating {
            Some(cell) => cell.parse(),
            None => ParsedRating {
                value: FALLBACK_RATING,
                unrated: true,
            },
        }
    }

    pub fn bonus_malus(&self) -> f64 {
        match (&self.bonus_malus, &self.events) {
            (Some(value), _) => *value,
            (None, Some(events)) => translate_events(events, self.role),
            (None, None) => 0.0,
        }
    }

    pub fn to_entry(&self) -> PlayerEntry {
        PlayerEntry::new(self.role, self.rating().value, self.bonus_malus())
    }
}

impl TeamSheet {
    pub fn lineup(&self) -> Vec<PlayerEntry> {
        self.players.iter().map(PlayerSheet::to_entry).collect()
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.players.iter().filter(|p| p.role == role).count()
    }
}

impl MatchSheet {
    /// Engine input for `(home, away)`, in slot order.
    pub fn lineups(&self) -> (Vec<PlayerEntry>, Vec<PlayerEntry>) {
        (self.home.lineup(), self.away.lineup())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(yaml: &str) -> PlayerSheet {
        serde_saphyr::from_str(yaml).unwrap()
    }

    #[test]
    fn test_numeric_rating() {
        let p = player("{ name: Rossi, role: D, rating: 6.5 }");
        assert_eq!(
            p.rating(),
            ParsedRating {
                value: 6.5,
                unrated: false
            }
        );
    }

    #[test]
    fn test_string_rating() {
        let p = player("{ name: Rossi, role: D, rating: \"7\" }");
        assert_eq!(p.rating().value, 7.0);
        assert!(!p.rating().unrated);
    }

    #[test]
    fn test_starred_rating_is_unrated() {
        let p = player("{ name: Rossi, role: C, rating: \"6*\" }");
        assert_eq!(
            p.rating(),
            ParsedRating {
                value: 6.0,
                unrated: true
            }
        );
    }

    #[test]
    fn test_comma_decimal_rating() {
        let p = player("{ name: Rossi, role: C, rating: \"5,5\" }");
        assert_eq!(p.rating().value, 5.5);
    }

    #[test]
    fn test_garbage_rating_falls_back() {
        let p = player("{ name: Rossi, role: C, rating: abc }");
        assert_eq!(
            p.rating(),
            ParsedRating {
                value: FALLBACK_RATING,
                unrated: true
            }
        );
    }

    #[test]
    fn test_missing_rating_falls_back() {
        let p = player("{ name: Rossi, role: A }");
        assert_eq!(p.rating().value, FALLBACK_RATING);
        assert!(p.rating().unrated);
    }

    #[test]
    fn test_bonus_from_events() {
        let p = player("{ name: Neri, role: P, rating: 6, events: { penalties_saved: 1 } }");
        // penalty saved + clean sheet
        assert_eq!(p.bonus_malus(), 4.0);
    }

    #[test]
    fn test_manual_bonus_wins_over_events() {
        let p = player(
            "{ name: Neri, role: A, rating: 6, bonus_malus: 1.5, events: { goals_scored: 2 } }",
        );
        assert_eq!(p.bonus_malus(), 1.5);
    }

    #[test]
    fn test_no_bonus_no_events() {
        let p = player("{ name: Neri, role: P, rating: 6 }");
        // no events listed means no clean sheet either
        assert_eq!(p.bonus_malus(), 0.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<PlayerSheet, _> =
            serde_saphyr::from_str("{ name: Neri, role: P, vote: 6 }");
        assert!(result.is_err());
    }

    #[test]
    fn test_lineups_keep_slot_order() {
        let yaml = r#"
home:
  name: Dynamo
  players:
    - { name: A, role: P, rating: 6 }
    - { name: B, role: D, rating: 6.5, bonus_malus: -0.5 }
away:
  name: Rovers
  players:
    - { name: C, role: A, rating: 7, events: { goals_scored: 1 } }
"#;
        let sheet: MatchSheet = serde_saphyr::from_str(yaml).unwrap();
        let (home, away) = sheet.lineups();
        assert_eq!(home.len(), 2);
        assert_eq!(home[1], PlayerEntry::new(Role::Defender, 6.5, -0.5));
        assert_eq!(away[0], PlayerEntry::new(Role::Attacker, 7.0, 3.0));
        assert_eq!(sheet.home.count_role(Role::Goalkeeper), 1);
    }
}
