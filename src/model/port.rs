use super::BlockId;
use std::fmt;

/// The kind of data or control flowing through a connection.
///
/// Two ports can only be connected when their tags are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    Action,
    Value,
    Condition,
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionType::Action => write!(f, "ACTION"),
            ConnectionType::Value => write!(f, "VALUE"),
            ConnectionType::Condition => write!(f, "CONDITION"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    Input,
    Output,
}

impl PortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
        }
    }
}

/// Stable index of a port inside a [`Graph`](crate::graph::Graph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortId(pub(crate) usize);

impl PortId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#p{}", self.0)
    }
}

/// Declaration of a port before it is materialized into a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    pub name: String,
    pub connection_type: ConnectionType,
    /// `None` means the port accepts any number of connections.
    pub max_connections: Option<usize>,
}

impl PortSpec {
    pub fn new(name: impl Into<String>, connection_type: ConnectionType) -> Self {
        Self {
            name: name.into(),
            connection_type,
            max_connections: None,
        }
    }

    pub fn with_capacity(mut self, max_connections: usize) -> Self {
        self.max_connections = Some(max_connections);
        self
    }
}

/// A port living in the graph arena. The owning block is a plain index, not a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub block: BlockId,
    pub name: String,
    pub direction: PortDirection,
    pub connection_type: ConnectionType,
    pub max_connections: Option<usize>,
}

impl Port {
    pub(crate) fn from_spec(block: BlockId, direction: PortDirection, spec: PortSpec) -> Self {
        Self {
            block,
            name: spec.name,
            direction,
            connection_type: spec.connection_type,
            max_connections: spec.max_connections,
        }
    }

    /// Returns `true` if one more connection would exceed the port's capacity.
    pub fn is_saturated(&self, current: usize) -> bool {
        self.max_connections.is_some_and(|max| current >= max)
    }
}
