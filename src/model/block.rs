use super::event::{COMPARE_OPERATORS, DEFAULT_PLAYER, EVENTS, TEAMS};
use super::{ConnectionType, Parameter, PortDirection, PortId, PortSpec};
use crate::error::SpecError;
use std::fmt;

pub const PREVIOUS_INPUT: &str = "previous";
pub const NEXT_OUTPUT: &str = "next";
pub const VALUE_OUTPUT: &str = "out";
pub const RULE_ACTION_OUTPUT: &str = "action";
pub const RULE_CONDITIONS_INPUT: &str = "conditions";
pub const CONDITION_LEFT_INPUT: &str = "value_a";
pub const CONDITION_RIGHT_INPUT: &str = "value_b";
pub const CONDITION_OUTPUT: &str = "condition";
pub const CONDITION_OPERATOR: &str = "operation";

/// The four closed block kinds. Every evaluation rule matches on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Value,
    Action,
    Rule,
    Condition,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Value => write!(f, "VALUE"),
            BlockKind::Action => write!(f, "ACTION"),
            BlockKind::Rule => write!(f, "RULE"),
            BlockKind::Condition => write!(f, "CONDITION"),
        }
    }
}

/// Stable index of a block inside a [`Graph`](crate::graph::Graph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#b{}", self.0)
    }
}

/// One position in a block's generated argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentSlot {
    /// Evaluate the first source wired to the named input.
    Input(String),
    /// Take the next parameter, in parameter order.
    Parameter(String),
}

/// Everything needed to materialize a block and its ports into a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSpec {
    pub name: String,
    pub kind: BlockKind,
    pub inputs: Vec<PortSpec>,
    pub outputs: Vec<PortSpec>,
    pub parameters: Vec<Parameter>,
    pub argument_order: Vec<ArgumentSlot>,
}

impl BlockSpec {
    /// An empty block of the given kind. Used by custom blocks that declare their own ports.
    pub fn new(name: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            name: name.into(),
            kind,
            inputs: Vec::new(),
            outputs: Vec::new(),
            parameters: Vec::new(),
            argument_order: Vec::new(),
        }
    }

    /// A value block with its single `out` output.
    pub fn value(name: impl Into<String>) -> Self {
        let mut spec = Self::new(name, BlockKind::Value);
        spec.outputs
            .push(PortSpec::new(VALUE_OUTPUT, ConnectionType::Value));
        spec
    }

    /// An action block with the implicit `previous` input and a single-target `next` output.
    pub fn action(name: impl Into<String>) -> Self {
        let mut spec = Self::new(name, BlockKind::Action);
        spec.inputs
            .push(PortSpec::new(PREVIOUS_INPUT, ConnectionType::Action));
        spec.outputs
            .push(PortSpec::new(NEXT_OUTPUT, ConnectionType::Action).with_capacity(1));
        spec
    }

    /// A rule block: event, team and player parameters, a `conditions` input and a single `action` output.
    pub fn rule(name: impl Into<String>) -> Self {
        let mut spec = Self::new(name, BlockKind::Rule);
        spec.parameters = vec![
            Parameter::enumerated("event", EVENTS, Some(EVENTS[0])),
            Parameter::enumerated("team", TEAMS, Some(TEAMS[0])),
            Parameter::text("player", Some(DEFAULT_PLAYER)),
        ];
        spec.inputs
            .push(PortSpec::new(RULE_CONDITIONS_INPUT, ConnectionType::Condition));
        spec.outputs.push(
            PortSpec::new(RULE_ACTION_OUTPUT, ConnectionType::Action).with_capacity(1),
        );
        spec
    }

    /// A comparison block: every `value_a` source is compared against the single `value_b` source.
    pub fn condition() -> Self {
        let mut spec = Self::new("Condition", BlockKind::Condition);
        spec.parameters = vec![Parameter::enumerated(
            CONDITION_OPERATOR,
            COMPARE_OPERATORS,
            Some(COMPARE_OPERATORS[0]),
        )];
        spec.inputs
            .push(PortSpec::new(CONDITION_LEFT_INPUT, ConnectionType::Value));
        spec.inputs
            .push(PortSpec::new(CONDITION_RIGHT_INPUT, ConnectionType::Value).with_capacity(1));
        spec.outputs
            .push(PortSpec::new(CONDITION_OUTPUT, ConnectionType::Condition));
        spec
    }

    pub fn add_input(&mut self, port: PortSpec) -> Result<(), SpecError> {
        Self::insert_port(&self.name, &mut self.inputs, port, PortDirection::Input)
    }

    pub fn add_output(&mut self, port: PortSpec) -> Result<(), SpecError> {
        Self::insert_port(&self.name, &mut self.outputs, port, PortDirection::Output)
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    /// Declares a wired argument: adds the input and records its position in the argument list.
    pub fn push_input_argument(&mut self, port: PortSpec) -> Result<(), SpecError> {
        let name = port.name.clone();
        self.add_input(port)?;
        self.argument_order.push(ArgumentSlot::Input(name));
        Ok(())
    }

    /// Declares a constant argument: adds the parameter and records its position in the argument list.
    pub fn push_parameter_argument(&mut self, parameter: Parameter) {
        self.argument_order
            .push(ArgumentSlot::Parameter(parameter.name.clone()));
        self.parameters.push(parameter);
    }

    fn insert_port(
        block_name: &str,
        ports: &mut Vec<PortSpec>,
        port: PortSpec,
        direction: PortDirection,
    ) -> Result<(), SpecError> {
        if ports.iter().any(|p| p.name == port.name) {
            return Err(SpecError::DuplicatePort {
                block_name: block_name.to_string(),
                name: port.name,
                direction: direction.as_str(),
            });
        }
        ports.push(port);
        Ok(())
    }
}

/// A block living in the graph arena. Ports are referenced by index.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub kind: BlockKind,
    pub inputs: Vec<PortId>,
    pub outputs: Vec<PortId>,
    pub parameters: Vec<Parameter>,
    pub argument_order: Vec<ArgumentSlot>,
}

impl Block {
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn owns(&self, port: PortId, direction: PortDirection) -> bool {
        match direction {
            PortDirection::Input => self.inputs.contains(&port),
            PortDirection::Output => self.outputs.contains(&port),
        }
    }
}
