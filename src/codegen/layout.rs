use crate::model::is_global_event;

/// One indentation level in generated rule text.
pub const INDENT: &str = "\t";

/// Lays out a complete rule block, one string per line.
///
/// Team and player lines are only written for events other than the global one.
/// Section bodies sit two levels below `rule(...)`.
pub fn render_rule(
    name: &str,
    event: &str,
    team: &str,
    player: &str,
    conditions: &[String],
    actions: &[String],
) -> Vec<String> {
    let mut event_lines = vec![format!("{};", event)];
    if !is_global_event(event) {
        event_lines.push(format!("{};", team));
        event_lines.push(format!("{};", player));
    }

    let mut lines = vec![format!("rule(\"{}\")", name), "{".to_string()];
    push_section(&mut lines, "event", &event_lines);
    lines.push(String::new());
    push_section(&mut lines, "conditions", conditions);
    lines.push(String::new());
    push_section(&mut lines, "actions", actions);
    lines.push("}".to_string());
    lines
}

fn push_section(lines: &mut Vec<String>, title: &str, body: &[String]) {
    lines.push(format!("{INDENT}{title}"));
    lines.push(format!("{INDENT}{{"));
    lines.extend(body.iter().map(|line| format!("{INDENT}{INDENT}{line}")));
    lines.push(format!("{INDENT}}}"));
}
