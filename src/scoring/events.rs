use serde::Serialize;

use super::types::{MatchEvents, Role};

pub const GOAL_SCORED: f64 = 3.0;
pub const ASSIST: f64 = 1.0;
pub const PENALTY_SCORED: f64 = 3.0;
pub const PENALTY_SAVED: f64 = 3.0;
pub const PENALTY_MISSED: f64 = -3.0;
pub const OWN_GOAL: f64 = -2.0;
pub const YELLOW_CARD: f64 = -0.5;
pub const RED_CARD: f64 = -1.0;
pub const GOAL_CONCEDED: f64 = -1.0;
pub const CLEAN_SHEET: f64 = 1.0;

/// One line of the event rule table that applied to a player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventContribution {
    pub label: &'static str,
    pub count: i32,
    pub per_event: f64,
    pub points: f64,
}

/// Translate a player's match events into a single bonus/malus.
///
/// Goals conceded and the clean-sheet bonus only apply to goalkeepers.
pub fn translate_events(events: &MatchEvents, role: Role) -> f64 {
    event_breakdown(events, role).iter().map(|c| c.points).sum()
}

/// The non-zero lines of the rule table behind `translate_events`.
pub fn event_breakdown(events: &MatchEvents, role: Role) -> Vec<EventContribution> {
    let mut lines = vec![
        ("Goals", events.goals_scored, GOAL_SCORED),
        ("Assists", events.assists, ASSIST),
        ("Penalties scored", events.penalties_scored, PENALTY_SCORED),
        ("Penalties saved", events.penalties_saved, PENALTY_SAVED),
        ("Penalties missed", events.penalties_missed, PENALTY_MISSED),
        ("Own goals", events.own_goals, OWN_GOAL),
        ("Yellow cards", events.yellow_cards, YELLOW_CARD),
        ("Red cards", events.red_cards, RED_CARD),
    ];

    if role == Role::Goalkeeper {
        lines.push(("Goals conceded", events.goals_conceded, GOAL_CONCEDED));
        if events.goals_conceded == 0 {
            lines.push(("Clean sheet", 1, CLEAN_SHEET));
        }
    }

    lines
        .into_iter()
        .filter(|(_, count, _)| *count != 0)
        .map(|(label, count, per_event)| EventContribution {
            label,
            count,
            per_event,
            points: count as f64 * per_event,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacker_two_goals_one_assist() {
        let events = MatchEvents {
            goals_scored: 2,
            assists: 1,
            ..Default::default()
        };
        assert_eq!(translate_events(&events, Role::Attacker), 7.0);
    }

    #[test]
    fn test_midfielder_goal_and_cards() {
        let events = MatchEvents {
            goals_scored: 1,
            yellow_cards: 1,
            red_cards: 1,
            ..Default::default()
        };
        assert_eq!(translate_events(&events, Role::Midfielder), 1.5);
    }

    #[test]
    fn test_goalkeeper_conceded_two_no_clean_sheet() {
        let events = MatchEvents {
            goals_conceded: 2,
            ..Default::default()
        };
        assert_eq!(translate_events(&events, Role::Goalkeeper), -2.0);
    }

    #[test]
    fn test_goalkeeper_clean_sheet_and_penalty_saved() {
        let events = MatchEvents {
            penalties_saved: 1,
            ..Default::default()
        };
        assert_eq!(translate_events(&events, Role::Goalkeeper), 4.0);
    }

    #[test]
    fn test_defender_own_goal_and_missed_penalty() {
        let events = MatchEvents {
            own_goals: 1,
            penalties_missed: 1,
            ..Default::default()
        };
        assert_eq!(translate_events(&events, Role::Defender), -5.0);
    }

    #[test]
    fn test_clean_sheet_is_exactly_one_for_idle_goalkeeper() {
        assert_eq!(
            translate_events(&MatchEvents::default(), Role::Goalkeeper),
            1.0
        );
    }

    #[test]
    fn test_clean_sheet_independent_of_other_events() {
        let events = MatchEvents {
            yellow_cards: 2,
            red_cards: 1,
            ..Default::default()
        };
        // -1.0 - 1.0 + 1.0 clean sheet
        assert_eq!(translate_events(&events, Role::Goalkeeper), -1.0);
    }

    #[test]
    fn test_non_goalkeepers_ignore_goals_conceded() {
        let events = MatchEvents {
            goals_conceded: 3,
            ..Default::default()
        };
        for role in [Role::Defender, Role::Midfielder, Role::Attacker] {
            assert_eq!(translate_events(&events, role), 0.0);
            assert_eq!(translate_events(&MatchEvents::default(), role), 0.0);
        }
    }

    #[test]
    fn test_negative_counts_propagate() {
        let events = MatchEvents {
            goals_scored: -1,
            ..Default::default()
        };
        assert_eq!(translate_events(&events, Role::Attacker), -3.0);
    }

    #[test]
    fn test_breakdown_lists_only_applied_rules() {
        let events = MatchEvents {
            goals_scored: 1,
            yellow_cards: 1,
            ..Default::default()
        };
        let lines = event_breakdown(&events, Role::Goalkeeper);
        let labels: Vec<_> = lines.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Goals", "Yellow cards", "Clean sheet"]);

        let total: f64 = lines.iter().map(|l| l.points).sum();
        assert_eq!(total, translate_events(&events, Role::Goalkeeper));
    }
}
