use log::debug;

use super::table::{DEFENSE_TABLE, MIDFIELD_TABLE};
use super::types::AttackerRating;

/// Rating credited to each missing midfield slot when the lines differ in size.
pub const MIDFIELD_PADDING_RATING: f64 = 5.0;

/// Defense modifier produced by a defensive line. It is applied to the
/// opponent's score, not to the defending side's own.
pub fn defense_modifier(base_ratings: &[f64], count: usize) -> f64 {
    if base_ratings.is_empty() {
        return 0.0;
    }

    let mean = base_ratings.iter().sum::<f64>() / base_ratings.len() as f64;
    let mut modifier = DEFENSE_TABLE.lookup(mean);

    modifier += match count {
        3 => 1,
        5 => -1,
        _ => 0,
    };

    // Stacks with the 5-man correction above
    if count > 4 {
        modifier -= (count - 4) as i32;
    }

    debug!(
        "defense: {} defenders, mean {:.3} -> {:+}",
        count, mean, modifier
    );
    modifier as f64
}

/// Midfield modifiers for `(home, away)`.
///
/// The shorter line is padded with `MIDFIELD_PADDING_RATING` per missing
/// player, then the side with the larger sum gets `+magnitude` and the other
/// `-magnitude`.
pub fn midfield_modifier(home: &[f64], away: &[f64]) -> (f64, f64) {
    let len = home.len().max(away.len());
    let sum_home = padded_sum(home, len);
    let sum_away = padded_sum(away, len);

    let magnitude = MIDFIELD_TABLE.lookup((sum_home - sum_away).abs());
    debug!(
        "midfield: {:.2} vs {:.2} -> magnitude {}",
        sum_home, sum_away, magnitude
    );

    if sum_home > sum_away {
        (magnitude, -magnitude)
    } else if sum_away > sum_home {
        (-magnitude, magnitude)
    } else {
        (0.0, 0.0)
    }
}

fn padded_sum(ratings: &[f64], len: usize) -> f64 {
    let missing = len - ratings.len();
    ratings.iter().sum::<f64>() + missing as f64 * MIDFIELD_PADDING_RATING
}

/// Attack modifier: rewards attackers whose rating alone was good, i.e. who
/// carry no bonus/malus at all.
pub fn attack_modifier(attackers: &[AttackerRating]) -> f64 {
    attackers
        .iter()
        .filter(|a| a.bonus_malus == 0.0)
        .map(|a| match a.base_rating {
            r if r >= 7.50 => 1.5,
            r if r >= 7.00 => 1.0,
            r if r >= 6.50 => 0.5,
            _ => 0.0,
        })
        .sum()
}
