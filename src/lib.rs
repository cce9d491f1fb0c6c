//! # Workshop Graph - Visual Script Compiler
//!
//! **workshop-graph** is the node/port graph model behind a visual rule editor and the
//! deterministic compiler that turns it into workshop script text. Users assemble typed
//! blocks (rules, actions, values and conditions), wire their ports together, and the graph
//! produces literal script text that a downstream parser accepts byte for byte.
//!
//! ## Core Workflow
//!
//! 1.  **Load Templates**: Read the `{ "actions": [...], "values": [...] }` catalog with
//!     [`Catalog::from_json`](catalog::Catalog::from_json) and turn templates into
//!     [`BlockSpec`](model::BlockSpec)s using a [`TypeTable`](catalog::TypeTable).
//! 2.  **Build the Graph**: [`Graph::spawn`](graph::Graph::spawn) each block, register rules as
//!     roots with [`Graph::add_block`](graph::Graph::add_block), and wire ports with
//!     [`Graph::wire`](graph::Graph::wire). Port type and arity are checked on every connection.
//! 3.  **Compile**: [`Graph::compile`](graph::Graph::compile) walks every rule in insertion order
//!     and returns the full script, or the first evaluation error.
//!
//! ## Quick Start
//!
//! ```rust
//! use workshop_graph::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = Catalog::from_json(r#"{
//!         "actions": [{ "name": "Heal", "args": [
//!             { "name": "Target", "type": "Player" },
//!             { "name": "Amount", "type": "Number Constant", "default": 50 }
//!         ]}],
//!         "values": [{ "name": "Event Player", "args": [] }]
//!     }"#)?;
//!     let types = TypeTable::default();
//!
//!     let mut graph = Graph::new();
//!     let rule = graph.spawn(BlockSpec::rule("Heal on spawn"));
//!     graph.add_block(rule)?;
//!     graph.set_parameter(rule, "event", "Ongoing - Each Player")?;
//!
//!     let heal = graph.spawn(catalog.action_spec("Heal", &types)?);
//!     let player = graph.spawn(catalog.value_spec("Event Player", &types)?);
//!     graph.wire(heal, "previous", rule, "action")?;
//!     graph.wire(heal, "target", player, "out")?;
//!
//!     let script = graph.compile()?;
//!     assert!(script.contains("\t\tHeal(Event Player(), 50);"));
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod codegen;
pub mod error;
pub mod graph;
pub mod model;
pub mod prelude;
