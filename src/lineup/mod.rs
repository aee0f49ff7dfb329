mod schema;
pub mod validation;

pub use schema::{
    MatchSheet, ParsedRating, PlayerSheet, RatingCell, TeamSheet, FALLBACK_RATING,
};
pub use validation::{formation_warnings, validate_match_sheet, LINEUP_SIZE};

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Load a match sheet from a YAML (or JSON) file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The content cannot be parsed as a match sheet
pub fn load_match_sheet(path: &Path) -> Result<MatchSheet> {
    if !path.exists() {
        anyhow::bail!("Match sheet not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read match sheet at {}", path.display()))?;

    let sheet = parse_match_sheet(&content)
        .with_context(|| format!("Failed to parse match sheet {}", path.display()))?;

    debug!(
        "loaded {} vs {} ({} + {} players)",
        sheet.home.name,
        sheet.away.name,
        sheet.home.players.len(),
        sheet.away.players.len()
    );
    Ok(sheet)
}

/// Parse match sheet text. JSON is accepted as a YAML subset.
pub fn parse_match_sheet(content: &str) -> Result<MatchSheet> {
    let sheet: MatchSheet = serde_saphyr::from_str(content).context("Invalid match sheet")?;
    Ok(sheet)
}

/// Example match sheet printed by `fanta-calc template`.
pub const TEMPLATE: &str = r#"# fanta-calc match sheet
# role: P (goalkeeper), D (defender), C (midfielder), A (attacker)
# rating: number, or "6*" for a player without an official rating
# events: any of goals_scored, goals_conceded, penalties_saved,
#         penalties_scored, penalties_missed, own_goals,
#         yellow_cards, red_cards, assists
# bonus_malus: manual override, replaces events
home:
  name: Home FC
  players:
    - { name: Keeper, role: P, rating: 6, events: { goals_conceded: 0 } }
    - { name: Defender 1, role: D, rating: 6 }
    - { name: Defender 2, role: D, rating: 6.5 }
    - { name: Defender 3, role: D, rating: 6 }
    - { name: Defender 4, role: D, rating: 6.5 }
    - { name: Midfielder 1, role: C, rating: 6 }
    - { name: Midfielder 2, role: C, rating: 6.5 }
    - { name: Midfielder 3, role: C, rating: 6 }
    - { name: Midfielder 4, role: C, rating: 6.5 }
    - { name: Striker 1, role: A, rating: 7, events: { goals_scored: 1 } }
    - { name: Striker 2, role: A, rating: 6.5 }
away:
  name: Away FC
  players:
    - { name: Keeper, role: P, rating: 6, events: { goals_conceded: 2 } }
    - { name: Defender 1, role: D, rating: 6 }
    - { name: Defender 2, role: D, rating: 6 }
    - { name: Defender 3, role: D, rating: 5.5 }
    - { name: Defender 4, role: D, rating: 6 }
    - { name: Midfielder 1, role: C, rating: 6 }
    - { name: Midfielder 2, role: C, rating: 6 }
    - { name: Midfielder 3, role: C, rating: 5.5 }
    - { name: Striker 1, role: A, rating: 7 }
    - { name: Striker 2, role: A, rating: "6*" }
    - { name: Striker 3, role: A, rating: 6, bonus_malus: 3 }
"#;
