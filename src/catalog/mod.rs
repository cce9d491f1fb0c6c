//! Block template catalog: the `{ "actions": [...], "values": [...] }` resource the editor
//! offers in its block drawer, and its conversion into block declarations.

pub mod conversion;
pub mod definition;
pub mod types;

pub use definition::*;
pub use types::*;
