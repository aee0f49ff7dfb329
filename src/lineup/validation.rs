use super::schema::{MatchSheet, TeamSheet};
use crate::scoring::{MatchEvents, Role};

pub const LINEUP_SIZE: usize = 11;

/// Validate a match sheet before it reaches the engine.
/// Returns all validation errors at once (not just the first).
pub fn validate_match_sheet(sheet: &MatchSheet) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if sheet.home.name.trim().is_empty() {
        errors.push("home.name: must not be empty".to_string());
    }
    if sheet.away.name.trim().is_empty() {
        errors.push("away.name: must not be empty".to_string());
    }
    if !sheet.home.name.trim().is_empty()
        && sheet.home.name.trim().eq_ignore_ascii_case(sheet.away.name.trim())
    {
        errors.push(format!(
            "away.name: '{}' is also the home team",
            sheet.away.name
        ));
    }

    validate_team("home", &sheet.home, &mut errors);
    validate_team("away", &sheet.away, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_team(side: &str, team: &TeamSheet, errors: &mut Vec<String>) {
    if team.players.len() != LINEUP_SIZE {
        errors.push(format!(
            "{}.players: expected {} players, found {}",
            side,
            LINEUP_SIZE,
            team.players.len()
        ));
    }

    for (i, player) in team.players.iter().enumerate() {
        let rating = player.rating();
        if !rating.value.is_finite() {
            errors.push(format!(
                "{}.players[{}].rating: '{}' is not a finite number",
                side, i, player.name
            ));
        }
        if let Some(bonus) = player.bonus_malus {
            if !bonus.is_finite() {
                errors.push(format!(
                    "{}.players[{}].bonus_malus: '{}' is not a finite number",
                    side, i, player.name
                ));
            }
        }
        if let Some(ref events) = player.events {
            for (field, count) in event_counts(events) {
                if count < 0 {
                    errors.push(format!(
                        "{}.players[{}].events.{}: must be non-negative, got {}",
                        side, i, field, count
                    ));
                }
            }
        }
    }
}

fn event_counts(events: &MatchEvents) -> [(&'static str, i32); 9] {
    [
        ("goals_scored", events.goals_scored),
        ("goals_conceded", events.goals_conceded),
        ("penalties_saved", events.penalties_saved),
        ("penalties_scored", events.penalties_scored),
        ("penalties_missed", events.penalties_missed),
        ("own_goals", events.own_goals),
        ("yellow_cards", events.yellow_cards),
        ("red_cards", events.red_cards),
        ("assists", events.assists),
    ]
}

/// Formation oddities that do not block computation.
pub fn formation_warnings(sheet: &MatchSheet) -> Vec<String> {
    let mut warnings = Vec::new();
    for (side, team) in [("home", &sheet.home), ("away", &sheet.away)] {
        let keepers = team.count_role(Role::Goalkeeper);
        if keepers != 1 {
            warnings.push(format!(
                "{}: {} fields {} goalkeepers (expected 1)",
                side, team.name, keepers
            ));
        }
        let defenders = team.count_role(Role::Defender);
        if !(3..=5).contains(&defenders) {
            warnings.push(format!(
                "{}: {} fields {} defenders (expected 3 to 5)",
                side, team.name, defenders
            ));
        }
        let unrated: Vec<_> = team
            .players
            .iter()
            .filter(|p| p.rating().unrated)
            .map(|p| p.name.as_str())
            .collect();
        if !unrated.is_empty() {
            warnings.push(format!(
                "{}: unrated players scored at the fallback rating: {}",
                side,
                unrated.join(", ")
            ));
        }
    }
    warnings
}
