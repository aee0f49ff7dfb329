use log::debug;

use super::modifiers::{attack_modifier, defense_modifier, midfield_modifier};
use super::table::{GOALS_OPEN_FROM, GOALS_STEP, GOALS_TABLE};
use super::types::{
    AttackerRating, MatchResult, PlayerEntry, Role, SideResult, TeamModifiers,
};

/// Flat bonus for the home side.
pub const HOME_ADVANTAGE: f64 = 2.0;

/// A lineup split by tactical line.
#[derive(Debug, Default)]
struct LineSplit {
    rating_sum: f64,
    defenders: Vec<f64>,
    midfielders: Vec<f64>,
    attackers: Vec<AttackerRating>,
}

impl LineSplit {
    fn from_lineup(lineup: &[PlayerEntry]) -> Self {
        let mut split = LineSplit::default();
        for player in lineup {
            split.rating_sum += player.total();
            match player.role {
                Role::Goalkeeper => {}
                Role::Defender => split.defenders.push(player.base_rating),
                Role::Midfielder => split.midfielders.push(player.base_rating),
                Role::Attacker => split.attackers.push(AttackerRating {
                    base_rating: player.base_rating,
                    bonus_malus: player.bonus_malus,
                }),
            }
        }
        split
    }
}

/// Compute the full result of a match between two lineups.
///
/// Both lineups are expected to hold exactly 11 players. This is not checked:
/// the arithmetic works for any size, but goal counts are only meaningful for
/// full lineups. Validate in the calling layer first.
pub fn compute_match_result(home: &[PlayerEntry], away: &[PlayerEntry]) -> MatchResult {
    let home_split = LineSplit::from_lineup(home);
    let away_split = LineSplit::from_lineup(away);

    let defense_home = defense_modifier(&home_split.defenders, home_split.defenders.len());
    let defense_away = defense_modifier(&away_split.defenders, away_split.defenders.len());
    let (mid_home, mid_away) =
        midfield_modifier(&home_split.midfielders, &away_split.midfielders);
    let attack_home = attack_modifier(&home_split.attackers);
    let attack_away = attack_modifier(&away_split.attackers);

    // Each side takes the defense modifier generated by the other
    let home_modifiers = TeamModifiers {
        defense_generated: defense_home,
        defense_conceded: defense_away,
        midfield: mid_home,
        attack: attack_home,
        home_advantage: HOME_ADVANTAGE,
    };
    let away_modifiers = TeamModifiers {
        defense_generated: defense_away,
        defense_conceded: defense_home,
        midfield: mid_away,
        attack: attack_away,
        home_advantage: 0.0,
    };

    let home_result = side_result(&home_split, home_modifiers);
    let away_result = side_result(&away_split, away_modifiers);
    let label = format!("{}-{}", home_result.goals, away_result.goals);

    debug!(
        "match: {:.2} vs {:.2} -> {}",
        home_result.final_score, away_result.final_score, label
    );

    MatchResult {
        home: home_result,
        away: away_result,
        label,
    }
}

fn side_result(split: &LineSplit, modifiers: TeamModifiers) -> SideResult {
    let final_score = split.rating_sum
        + modifiers.defense_conceded
        + modifiers.midfield
        + modifiers.attack
        + modifiers.home_advantage;

    SideResult {
        team_rating_sum: round2(split.rating_sum),
        goals: score_to_goals(final_score),
        final_score: round2(final_score),
        modifiers: TeamModifiers {
            defense_generated: round2(modifiers.defense_generated),
            defense_conceded: round2(modifiers.defense_conceded),
            midfield: round2(modifiers.midfield),
            attack: round2(modifiers.attack),
            home_advantage: round2(modifiers.home_advantage),
        },
        defenders: split.defenders.len(),
        midfielders: split.midfielders.len(),
        attackers: split.attackers.len(),
    }
}

/// Convert a final score into goals.
///
/// Below 85 the fixed bands apply; from 85 on, one more goal for every
/// further 4 points. The count saturates at `u32::MAX`, and a NaN score
/// yields 0 goals.
pub fn score_to_goals(score: f64) -> u32 {
    if score.is_nan() {
        return 0;
    }
    if score < GOALS_OPEN_FROM {
        return GOALS_TABLE.lookup(score);
    }
    // `as` saturates, so infinity maps to u32::MAX
    let extra = ((score - GOALS_OPEN_FROM) / GOALS_STEP).floor() as u32;
    GOALS_TABLE.above.saturating_add(extra)
}

/// Round for presentation. Also folds -0.0 into 0.0.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}
