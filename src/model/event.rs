//! Fixed choices offered by a rule's event section.

/// The event that runs once for the whole match. Rules using it carry no team or player line.
pub const GLOBAL_EVENT: &str = "Ongoing - Global";

pub const EVENTS: &[&str] = &[
    GLOBAL_EVENT,
    "Ongoing - Each Player",
    "Player Earned Elimination",
    "Player Dealt Final Blow",
    "Player Dealt Damage",
    "Player Took Damage",
    "Player Died",
];

pub const TEAMS: &[&str] = &["All", "Team 1", "Team 2"];

pub const DEFAULT_PLAYER: &str = "All";

pub const COMPARE_OPERATORS: &[&str] = &["==", "!=", "<", "<=", ">", ">="];

pub fn is_global_event(event: &str) -> bool {
    event == GLOBAL_EVENT
}
