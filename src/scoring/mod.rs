//! Fantasy-football scoring engine.
//!
//! Pure functions only: event translation, per-line modifiers, match
//! aggregation and the score-to-goals mapping.

pub mod engine;
pub mod events;
pub mod modifiers;
pub mod table;
pub mod types;

pub use engine::{compute_match_result, score_to_goals, HOME_ADVANTAGE};
pub use events::{event_breakdown, translate_events, EventContribution};
pub use modifiers::{attack_modifier, defense_modifier, midfield_modifier};
pub use table::StepTable;
pub use types::*;
