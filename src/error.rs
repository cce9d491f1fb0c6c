use crate::model::{BlockId, BlockKind, ConnectionType, PortId};
use thiserror::Error;

/// Errors raised while wiring a sink input to a source output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Port {port} is not an {expected} of block {block}")]
    PortNotOwned {
        port: PortId,
        block: BlockId,
        expected: &'static str,
    },

    #[error("Cannot connect {sink} ({sink_type}) to {output} ({output_type}): connection types differ")]
    TypeMismatch {
        sink: PortId,
        sink_type: ConnectionType,
        output: PortId,
        output_type: ConnectionType,
    },

    #[error("Port '{name}' already holds its maximum of {max} connection(s)")]
    PortSaturated { name: String, max: usize },

    #[error("Block {block} has no {direction} named '{name}'")]
    UnknownPort {
        block: BlockId,
        name: String,
        direction: &'static str,
    },

    #[error("Block {0} does not exist in this graph")]
    UnknownBlock(BlockId),
}

/// Errors raised while evaluating blocks into script text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Input '{input}' of block '{block_name}' ({block}) has no connection")]
    MissingConnection {
        block: BlockId,
        block_name: String,
        input: String,
    },

    #[error("Condition block {0} has no right operand connected to 'value_b'")]
    MissingRightOperand(BlockId),

    #[error("Block '{block_name}' ({block}) is a {kind} block and cannot be used as a value")]
    NotAnExpression {
        block: BlockId,
        block_name: String,
        kind: BlockKind,
    },

    #[error("Block '{block_name}' ({block}) is a {kind} block and cannot be emitted as statements")]
    NotAStatement {
        block: BlockId,
        block_name: String,
        kind: BlockKind,
    },

    #[error("Block '{block_name}' ({block}) has no value for parameter '{parameter}'")]
    MissingParameter {
        block: BlockId,
        block_name: String,
        parameter: String,
    },

    #[error("Port {0} is connected but no longer belongs to a block")]
    DanglingPort(PortId),

    #[error("Block {0} does not exist in this graph")]
    UnknownBlock(BlockId),
}

/// Errors raised when managing the root set of a graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Only rule blocks can be graph roots, but block {block} is a {kind} block")]
    TypeMismatch { block: BlockId, kind: BlockKind },

    #[error("Block {0} does not exist in this graph")]
    UnknownBlock(BlockId),
}

/// Errors raised when assigning a parameter value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Block {block} has no parameter named '{name}'")]
    Unknown { block: BlockId, name: String },

    #[error("Parameter '{name}' expects a number, but got '{value}'")]
    InvalidNumber { name: String, value: String },

    #[error("'{value}' is not one of the allowed values for parameter '{name}': {allowed}")]
    NotAllowed {
        name: String,
        value: String,
        allowed: String,
    },

    #[error("Block {0} does not exist in this graph")]
    UnknownBlock(BlockId),
}

/// Errors raised while declaring the ports of a block.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("Block '{block_name}' already has an {direction} named '{name}'")]
    DuplicatePort {
        block_name: String,
        name: String,
        direction: &'static str,
    },
}

/// Errors raised while loading or querying the block template catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("No {kind} template named '{name}' in the catalog")]
    UnknownTemplate { kind: BlockKind, name: String },

    #[error("Template '{name}' cannot be turned into a {kind} block")]
    UnsupportedKind { name: String, kind: BlockKind },

    #[error("Template '{template}' is invalid: {source}")]
    InvalidTemplate {
        template: String,
        #[source]
        source: SpecError,
    },
}
