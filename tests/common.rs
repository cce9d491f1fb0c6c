//! Common test utilities for building catalogs and graphs.
use workshop_graph::model::GLOBAL_EVENT;
use workshop_graph::prelude::*;

#[allow(dead_code)]
pub const CATALOG_JSON: &str = r#"{
    "actions": [
        {
            "name": "Heal",
            "args": [
                { "name": "Target", "type": "Player" },
                { "name": "Amount", "type": "Number Constant", "default": 50 }
            ]
        },
        {
            "name": "Wait",
            "args": [
                { "name": "Time", "type": "Number Constant", "default": 0.25 },
                { "name": "Wait Behavior", "type": "Wait Behavior" }
            ]
        },
        {
            "name": "Set Status",
            "args": [
                { "name": "Player", "type": "Player" },
                { "name": "Assister", "type": "Player" },
                { "name": "Status", "type": "Status", "default": "Frozen" },
                { "name": "Duration", "type": "Number" }
            ]
        }
    ],
    "values": [
        { "name": "Event Player", "args": [] },
        { "name": "Number", "args": [ { "name": "Value", "type": "Number Constant" } ] },
        {
            "name": "Add",
            "args": [
                { "name": "Value", "type": "Number" },
                { "name": "Other", "type": "Number" }
            ]
        },
        { "name": "Custom String", "args": [ { "name": "String", "type": "String Constant", "default": "Hello" } ] }
    ]
}"#;

#[allow(dead_code)]
pub fn catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).expect("fixture catalog must parse")
}

/// Installs a test subscriber so `RUST_LOG=debug` shows graph activity.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A value block with no inputs and a single text parameter, e.g. `Name(5)`.
#[allow(dead_code)]
pub fn constant(graph: &mut Graph, name: &str, text: &str) -> BlockId {
    let mut spec = BlockSpec::value(name);
    spec.push_parameter_argument(Parameter::text("value", Some(text)));
    graph.spawn(spec)
}

/// A value block with no arguments at all, e.g. `Event Player()`.
#[allow(dead_code)]
pub fn nullary(graph: &mut Graph, name: &str) -> BlockId {
    graph.spawn(BlockSpec::value(name))
}

/// A rule registered as a root, using the global event.
#[allow(dead_code)]
pub fn global_rule(graph: &mut Graph, name: &str) -> BlockId {
    let rule = graph.spawn(BlockSpec::rule(name));
    graph.add_block(rule).expect("rules are accepted as roots");
    graph
        .set_parameter(rule, "event", GLOBAL_EVENT)
        .expect("global event is allowed");
    rule
}

/// A rule registered as a root, firing for each player of the given team.
#[allow(dead_code)]
pub fn player_rule(graph: &mut Graph, name: &str, team: &str, player: &str) -> BlockId {
    let rule = graph.spawn(BlockSpec::rule(name));
    graph.add_block(rule).expect("rules are accepted as roots");
    graph
        .set_parameter(rule, "event", "Ongoing - Each Player")
        .expect("event is allowed");
    graph.set_parameter(rule, "team", team).expect("team is allowed");
    graph
        .set_parameter(rule, "player", player)
        .expect("player is free text");
    rule
}

/// Joins expected script lines the way `compile` does.
#[allow(dead_code)]
pub fn lines(parts: &[&str]) -> String {
    parts.join("\n")
}
