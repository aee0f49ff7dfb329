use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tactical role of a lineup slot.
///
/// Rating sheets use single letters: P (portiere), D, C (centrocampista), A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl Role {
    pub fn letter(self) -> char {
        match self {
            Role::Goalkeeper => 'P',
            Role::Defender => 'D',
            Role::Midfielder => 'C',
            Role::Attacker => 'A',
        }
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    /// Accepts the role letter or the full English word, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "goalkeeper" => Ok(Role::Goalkeeper),
            "d" | "defender" => Ok(Role::Defender),
            "c" | "midfielder" => Ok(Role::Midfielder),
            "a" | "attacker" => Ok(Role::Attacker),
            other => bail!("Unknown role '{}': expected one of P, D, C, A", other),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.letter().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Goalkeeper => "goalkeeper",
            Role::Defender => "defender",
            Role::Midfielder => "midfielder",
            Role::Attacker => "attacker",
        };
        write!(f, "{}", name)
    }
}

/// One lineup slot as the aggregator sees it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PlayerEntry {
    pub role: Role,
    pub base_rating: f64,
    pub bonus_malus: f64,
}

impl PlayerEntry {
    pub fn new(role: Role, base_rating: f64, bonus_malus: f64) -> Self {
        Self {
            role,
            base_rating,
            bonus_malus,
        }
    }

    pub fn total(&self) -> f64 {
        self.base_rating + self.bonus_malus
    }
}

/// Discrete events for one player in one match.
///
/// Counts are signed: the translator treats them as plain arithmetic and a
/// negative count lowers the bonus as a positive one would raise it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchEvents {
    pub goals_scored: i32,
    /// Only relevant for goalkeepers.
    pub goals_conceded: i32,
    pub penalties_saved: i32,
    pub penalties_scored: i32,
    pub penalties_missed: i32,
    pub own_goals: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub assists: i32,
}

/// Attacker input for the attack modifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackerRating {
    pub base_rating: f64,
    pub bonus_malus: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamModifiers {
    /// Produced by this side's defenders, applied to the opponent.
    pub defense_generated: f64,
    /// The opponent's `defense_generated`, applied to this side.
    pub defense_conceded: f64,
    pub midfield: f64,
    pub attack: f64,
    pub home_advantage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideResult {
    pub team_rating_sum: f64,
    pub modifiers: TeamModifiers,
    pub final_score: f64,
    pub goals: u32,
    pub defenders: usize,
    pub midfielders: usize,
    pub attackers: usize,
}

impl SideResult {
    /// Formation string such as "4-4-2".
    pub fn formation(&self) -> String {
        format!("{}-{}-{}", self.defenders, self.midfielders, self.attackers)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub home: SideResult,
    pub away: SideResult,
    /// "goalsHome-goalsAway", e.g. "2-1".
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_letters_and_words() {
        assert_eq!("P".parse::<Role>().unwrap(), Role::Goalkeeper);
        assert_eq!("d".parse::<Role>().unwrap(), Role::Defender);
        assert_eq!(" C ".parse::<Role>().unwrap(), Role::Midfielder);
        assert_eq!("Attacker".parse::<Role>().unwrap(), Role::Attacker);
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!("X".parse::<Role>().is_err());
        assert!("Dif".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_uses_letter() {
        let json = serde_json::to_string(&Role::Midfielder).unwrap();
        assert_eq!(json, "\"C\"");
        let role: Role = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(role, Role::Attacker);
    }

    #[test]
    fn test_player_total() {
        let player = PlayerEntry::new(Role::Attacker, 7.0, 3.0);
        assert_eq!(player.total(), 10.0);
    }

    #[test]
    fn test_events_default_to_zero() {
        let events: MatchEvents = serde_saphyr::from_str("goals_scored: 2").unwrap();
        assert_eq!(events.goals_scored, 2);
        assert_eq!(events.assists, 0);
        assert_eq!(events.goals_conceded, 0);
    }

    #[test]
    fn test_formation_string() {
        let side = SideResult {
            team_rating_sum: 70.0,
            modifiers: TeamModifiers::default(),
            final_score: 70.0,
            goals: 1,
            defenders: 3,
            midfielders: 5,
            attackers: 2,
        };
        assert_eq!(side.formation(), "3-5-2");
    }
}
