use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::config::ColorMode;
use crate::scoring::{EventContribution, MatchResult, Role, SideResult};

/// Decide whether to colour text output
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Format a modifier with an explicit sign and two decimals ("+1.00", "-2.00")
pub fn format_signed(value: f64) -> String {
    format!("{:+.2}", value)
}

/// Full decomposition of a match result, one block per side, then the final label
pub fn format_match_result(
    result: &MatchResult,
    home_name: &str,
    away_name: &str,
    use_colors: bool,
) -> String {
    let mut blocks = vec![
        format_side(home_name, &result.home, use_colors),
        format_side(away_name, &result.away, use_colors),
    ];

    let final_line = format!("{} {} {}", home_name, result.label, away_name);
    if use_colors {
        blocks.push(format!("Result: {}", final_line.bold()));
    } else {
        blocks.push(format!("Result: {}", final_line));
    }
    blocks.join("\n\n")
}

fn format_side(name: &str, side: &SideResult, use_colors: bool) -> String {
    let m = &side.modifiers;
    let rows = [
        ("Formation", side.formation()),
        ("Team rating", format!("{:.2}", side.team_rating_sum)),
        ("Defense conceded", format_signed(m.defense_conceded)),
        ("Midfield", format_signed(m.midfield)),
        ("Attack", format_signed(m.attack)),
        ("Home advantage", format_signed(m.home_advantage)),
        ("Final score", format!("{:.2}", side.final_score)),
    ];

    let mut lines = Vec::with_capacity(rows.len() + 3);
    if use_colors {
        lines.push(format!("{}", name.bold().cyan()));
    } else {
        lines.push(name.to_string());
    }
    for (label, value) in rows {
        lines.push(format!("  {:<18}{:>8}", label, value));
    }
    // Generated defense is informational: it lands on the other side's score
    let generated = format!(
        "  {:<18}{:>8}",
        "Defense generated",
        format_signed(m.defense_generated)
    );
    if use_colors {
        lines.push(format!("{}", generated.dimmed()));
    } else {
        lines.push(generated);
    }
    let goals = format!("  {:<18}{:>8}", "Goals", side.goals);
    if use_colors {
        lines.push(format!("{}", goals.bold()));
    } else {
        lines.push(goals);
    }
    lines.join("\n")
}

/// Format an event breakdown with its total
pub fn format_bonus(
    role: Role,
    lines: &[EventContribution],
    total: f64,
    use_colors: bool,
) -> String {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("Bonus/malus ({})", role));

    if lines.is_empty() {
        out.push("  no events".to_string());
    }
    for line in lines {
        let row = format!(
            "  {:<18}{:>3} x {:>5}  {:>7}",
            line.label,
            line.count,
            format_signed(line.per_event),
            format_signed(line.points)
        );
        if use_colors && line.points < 0.0 {
            out.push(format!("{}", row.red()));
        } else if use_colors {
            out.push(format!("{}", row.green()));
        } else {
            out.push(row);
        }
    }

    let total_row = format!("  {:<33}{:>7}", "Total", format_signed(total));
    if use_colors {
        out.push(format!("{}", total_row.bold()));
    } else {
        out.push(total_row);
    }
    out.join("\n")
}
