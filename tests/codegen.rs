//! Tests for the text produced by each block kind.
mod common;
use common::*;
use workshop_graph::model::GLOBAL_EVENT;
use workshop_graph::prelude::*;

#[test]
fn test_value_with_single_text_parameter() {
    let mut graph = Graph::new();
    let value = constant(&mut graph, "Name", "5");

    let generator = CodeGenerator::new(&graph);
    assert_eq!(generator.expression(value).unwrap(), "Name(5)");
    assert_eq!(
        generator.evaluate(value).unwrap(),
        Evaluation::Expression("Name(5)".to_string())
    );
}

#[test]
fn test_value_arguments_follow_declaration_order() {
    let mut graph = Graph::new();
    let mut spec = BlockSpec::value("Mixed");
    spec.push_parameter_argument(Parameter::number("first", Some(1.0)));
    spec.push_input_argument(PortSpec::new("second", ConnectionType::Value))
        .unwrap();
    spec.push_parameter_argument(Parameter::text("third", Some("Three")));
    spec.push_input_argument(PortSpec::new("fourth", ConnectionType::Value))
        .unwrap();
    let mixed = graph.spawn(spec);
    let two = nullary(&mut graph, "Two");
    let four = constant(&mut graph, "Four", "4");
    graph.wire(mixed, "fourth", four, "out").unwrap();
    graph.wire(mixed, "second", two, "out").unwrap();

    let text = CodeGenerator::new(&graph).expression(mixed).unwrap();
    assert_eq!(text, "Mixed(1, Two(), Three, Four(4))");
}

#[test]
fn test_value_uses_first_connected_source_only() {
    let mut graph = Graph::new();
    let mut spec = BlockSpec::value("Abs");
    spec.push_input_argument(PortSpec::new("value", ConnectionType::Value))
        .unwrap();
    let abs = graph.spawn(spec);
    let first = constant(&mut graph, "Number", "1");
    let second = constant(&mut graph, "Number", "2");
    graph.wire(abs, "value", first, "out").unwrap();
    graph.wire(abs, "value", second, "out").unwrap();

    assert_eq!(
        CodeGenerator::new(&graph).expression(abs).unwrap(),
        "Abs(Number(1))"
    );
}

#[test]
fn test_unconnected_input_fails_with_missing_connection() {
    let mut graph = Graph::new();
    let mut spec = BlockSpec::value("Abs");
    spec.push_input_argument(PortSpec::new("value", ConnectionType::Value))
        .unwrap();
    let abs = graph.spawn(spec);

    let err = CodeGenerator::new(&graph).expression(abs).unwrap_err();
    assert_eq!(
        err,
        EvaluationError::MissingConnection {
            block: abs,
            block_name: "Abs".to_string(),
            input: "value".to_string(),
        }
    );
}

#[test]
fn test_action_skips_previous_and_follows_chain() {
    let mut graph = Graph::new();
    let mut first = BlockSpec::action("Kill");
    first
        .push_input_argument(PortSpec::new("player", ConnectionType::Value))
        .unwrap();
    let first = graph.spawn(first);
    let second = graph.spawn(BlockSpec::action("Abort"));
    let player = nullary(&mut graph, "Event Player");

    graph.wire(first, "player", player, "out").unwrap();
    graph.wire(second, "previous", first, "next").unwrap();

    let lines = CodeGenerator::new(&graph).statements(first).unwrap();
    assert_eq!(lines, vec!["Kill(Event Player());", "Abort();"]);
}

#[test]
fn test_action_emits_every_output_in_declaration_order() {
    let mut graph = Graph::new();
    let mut spec = BlockSpec::action("Branch");
    spec.add_output(PortSpec::new("otherwise", ConnectionType::Action))
        .unwrap();
    let branch = graph.spawn(spec);
    let a = graph.spawn(BlockSpec::action("A"));
    let b = graph.spawn(BlockSpec::action("B"));
    let c = graph.spawn(BlockSpec::action("C"));

    graph.wire(b, "previous", branch, "otherwise").unwrap();
    graph.wire(a, "previous", branch, "next").unwrap();
    graph.wire(c, "previous", branch, "otherwise").unwrap();

    let lines = CodeGenerator::new(&graph).statements(branch).unwrap();
    assert_eq!(lines, vec!["Branch();", "A();", "B();", "C();"]);
}

#[test]
fn test_condition_emits_one_line_per_left_operand() {
    let mut graph = Graph::new();
    let condition = graph.spawn(BlockSpec::condition());
    graph.set_parameter(condition, "operation", ">=").unwrap();
    let left_a = constant(&mut graph, "Number", "1");
    let left_b = nullary(&mut graph, "Event Player");
    let right = constant(&mut graph, "Number", "10");
    graph.wire(condition, "value_a", left_a, "out").unwrap();
    graph.wire(condition, "value_a", left_b, "out").unwrap();
    graph.wire(condition, "value_b", right, "out").unwrap();

    let lines = CodeGenerator::new(&graph).statements(condition).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Number(1) >= Number(10);");
    assert_eq!(lines[1], "Event Player() >= Number(10);");
    assert!(lines.iter().all(|line| line.ends_with(';')));
}

#[test]
fn test_condition_without_right_operand_fails() {
    let mut graph = Graph::new();
    let condition = graph.spawn(BlockSpec::condition());
    let left = constant(&mut graph, "Number", "1");
    graph.wire(condition, "value_a", left, "out").unwrap();

    let err = CodeGenerator::new(&graph).statements(condition).unwrap_err();
    assert_eq!(err, EvaluationError::MissingRightOperand(condition));
}

#[test]
fn test_condition_without_left_operands_is_empty() {
    let mut graph = Graph::new();
    let condition = graph.spawn(BlockSpec::condition());
    let right = constant(&mut graph, "Number", "1");
    graph.wire(condition, "value_b", right, "out").unwrap();

    assert!(CodeGenerator::new(&graph)
        .statements(condition)
        .unwrap()
        .is_empty());
}

#[test]
fn test_global_rule_layout() {
    let mut graph = Graph::new();
    let rule = global_rule(&mut graph, "Setup");

    let rendered = CodeGenerator::new(&graph).statements(rule).unwrap();
    assert_eq!(
        rendered.join("\n"),
        lines(&[
            "rule(\"Setup\")",
            "{",
            "\tevent",
            "\t{",
            "\t\tOngoing - Global;",
            "\t}",
            "",
            "\tconditions",
            "\t{",
            "\t}",
            "",
            "\tactions",
            "\t{",
            "\t}",
            "}",
        ])
    );
}

#[test]
fn test_non_global_rule_emits_team_and_player() {
    let mut graph = Graph::new();
    let rule = player_rule(&mut graph, "Per player", "Team 2", "Reaper");

    let lines = CodeGenerator::new(&graph).statements(rule).unwrap();
    assert_eq!(
        &lines[2..6],
        &["\tevent", "\t{", "\t\tOngoing - Each Player;", "\t\tTeam 2;"]
    );
    assert_eq!(lines[6], "\t\tReaper;");
    assert_eq!(lines[7], "\t}");
}

#[test]
fn test_global_event_omits_team_and_player_whatever_their_values() {
    let mut graph = Graph::new();
    let rule = player_rule(&mut graph, "Switched", "Team 1", "Mercy");
    graph.set_parameter(rule, "event", GLOBAL_EVENT).unwrap();

    let script = graph.compile().unwrap();
    assert!(!script.contains("Team 1;"));
    assert!(!script.contains("Mercy;"));
}

#[test]
fn test_rule_indents_conditions_and_actions() {
    let mut graph = Graph::new();
    let rule = global_rule(&mut graph, "Indented");
    let condition = graph.spawn(BlockSpec::condition());
    let left = nullary(&mut graph, "Is Game In Progress");
    let right = nullary(&mut graph, "True");
    graph.wire(condition, "value_a", left, "out").unwrap();
    graph.wire(condition, "value_b", right, "out").unwrap();
    graph.wire(rule, "conditions", condition, "condition").unwrap();
    let action = graph.spawn(BlockSpec::action("Pause Match Time"));
    graph.wire(action, "previous", rule, "action").unwrap();

    let lines = CodeGenerator::new(&graph).statements(rule).unwrap();
    assert!(lines.contains(&"\t\tIs Game In Progress() == True();".to_string()));
    assert!(lines.contains(&"\t\tPause Match Time();".to_string()));
}

#[test]
fn test_value_block_cannot_be_emitted_as_statements() {
    let mut graph = Graph::new();
    let value = nullary(&mut graph, "Event Player");
    let rule = graph.spawn(BlockSpec::rule("Rule"));

    let generator = CodeGenerator::new(&graph);
    assert!(matches!(
        generator.statements(value),
        Err(EvaluationError::NotAStatement { kind: BlockKind::Value, .. })
    ));
    assert!(matches!(
        generator.expression(rule),
        Err(EvaluationError::NotAnExpression { kind: BlockKind::Rule, .. })
    ));
}

#[test]
fn test_number_parameters_render_without_trailing_zero() {
    let mut graph = Graph::new();
    let mut spec = BlockSpec::value("Vector");
    spec.push_parameter_argument(Parameter::number("x", Some(1.0)));
    spec.push_parameter_argument(Parameter::number("y", Some(2.5)));
    spec.push_parameter_argument(Parameter::number("z", None));
    let vector = graph.spawn(spec);

    assert_eq!(
        CodeGenerator::new(&graph).expression(vector).unwrap(),
        "Vector(1, 2.5, 0)"
    );
}
