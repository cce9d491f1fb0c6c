//! Prelude module for convenient imports
//!
//! This module re-exports the editor-facing surface of the crate: building blocks,
//! wiring them into a graph and compiling it.
//!
//! # Example
//!
//! ```rust
//! use workshop_graph::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut graph = Graph::new();
//! let rule = graph.spawn(BlockSpec::rule("Empty rule"));
//! graph.add_block(rule)?;
//!
//! let script = graph.compile()?;
//! assert!(script.starts_with("rule(\"Empty rule\")"));
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Graph and compilation
pub use crate::codegen::{CodeGenerator, Evaluation};
pub use crate::graph::Graph;

// Block model
pub use crate::model::{
    ArgumentSlot, Block, BlockId, BlockKind, BlockSpec, ConnectionType, Parameter, ParameterKind,
    ParameterValue, PortId, PortSpec,
};

// Template catalog
pub use crate::catalog::{Catalog, Template, TemplateArg, TypeTable};

// Error types
pub use crate::error::{
    CatalogError, ConnectionError, EvaluationError, GraphError, ParameterError, SpecError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
