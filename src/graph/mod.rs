//! The block arena and the ordered set of rule roots.
//!
//! Blocks and ports are stored in slots addressed by [`BlockId`] and [`PortId`]. Every edge is
//! recorded on both endpoints in a single adjacency map, so a block can be fully detached in
//! one call instead of by chasing back-references.

use crate::codegen::CodeGenerator;
use crate::error::{EvaluationError, GraphError};
use crate::model::{Block, BlockId, BlockKind, BlockSpec, Port, PortDirection, PortId};
use ahash::AHashMap;

mod editing;
mod wiring;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    blocks: Vec<Option<Block>>,
    ports: Vec<Option<Port>>,
    links: AHashMap<PortId, Vec<PortId>>,
    roots: Vec<BlockId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materializes a block and its ports into the arena.
    ///
    /// The new block is not a root. Rules must be registered with [`Graph::add_block`]
    /// to take part in compilation; other kinds are reached through connections.
    pub fn spawn(&mut self, spec: BlockSpec) -> BlockId {
        let id = BlockId(self.blocks.len());
        let inputs = spec
            .inputs
            .into_iter()
            .map(|port| self.push_port(Port::from_spec(id, PortDirection::Input, port)))
            .collect();
        let outputs = spec
            .outputs
            .into_iter()
            .map(|port| self.push_port(Port::from_spec(id, PortDirection::Output, port)))
            .collect();

        tracing::debug!(block = %id, name = %spec.name, kind = %spec.kind, "spawned block");
        self.blocks.push(Some(Block {
            name: spec.name,
            kind: spec.kind,
            inputs,
            outputs,
            parameters: spec.parameters,
            argument_order: spec.argument_order,
        }));
        id
    }

    fn push_port(&mut self, port: Port) -> PortId {
        let id = PortId(self.ports.len());
        self.ports.push(Some(port));
        id
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn port(&self, id: PortId) -> Option<&Port> {
        self.ports.get(id.0).and_then(Option::as_ref)
    }

    /// The block owning a port.
    pub fn owner(&self, port: PortId) -> Option<BlockId> {
        self.port(port).map(|p| p.block)
    }

    pub fn input(&self, block: BlockId, name: &str) -> Option<PortId> {
        self.find_port(block, name, PortDirection::Input)
    }

    pub fn output(&self, block: BlockId, name: &str) -> Option<PortId> {
        self.find_port(block, name, PortDirection::Output)
    }

    fn find_port(&self, block: BlockId, name: &str, direction: PortDirection) -> Option<PortId> {
        let block = self.block(block)?;
        let ports = match direction {
            PortDirection::Input => &block.inputs,
            PortDirection::Output => &block.outputs,
        };
        ports
            .iter()
            .copied()
            .find(|id| self.port(*id).is_some_and(|p| p.name == name))
    }

    /// Peers connected to `port`, in connection order. Parallel edges appear once per edge.
    pub fn targets(&self, port: PortId) -> &[PortId] {
        self.links.get(&port).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of ports that currently hold at least one edge.
    pub fn linked_ports(&self) -> usize {
        self.links.len()
    }

    /// Iterates over every live block in arena order.
    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|block| (BlockId(index), block)))
    }

    /// The rule roots, in insertion (and therefore output) order.
    pub fn roots(&self) -> &[BlockId] {
        &self.roots
    }

    /// Registers a rule block as a root. Any other kind is rejected.
    pub fn add_block(&mut self, id: BlockId) -> Result<(), GraphError> {
        let block = self.block(id).ok_or(GraphError::UnknownBlock(id))?;
        if block.kind != BlockKind::Rule {
            return Err(GraphError::TypeMismatch {
                block: id,
                kind: block.kind,
            });
        }
        self.roots.push(id);
        Ok(())
    }

    /// Removes a root from the output order. Connected blocks are left wired as they are.
    ///
    /// Returns `false` if the block was not a root.
    pub fn remove_block(&mut self, id: BlockId) -> bool {
        match self.roots.iter().position(|root| *root == id) {
            Some(index) => {
                self.roots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Detaches a block, drops it from the roots and frees its arena slots.
    ///
    /// Freed slots are never handed out again, so stale ids keep resolving to nothing.
    pub fn discard_block(&mut self, id: BlockId) -> Result<(), GraphError> {
        self.detach_block(id)?;
        self.roots.retain(|root| *root != id);
        if let Some(block) = self.blocks.get_mut(id.0).and_then(Option::take) {
            for port in block.inputs.iter().chain(&block.outputs) {
                self.ports[port.0] = None;
            }
        }
        tracing::debug!(block = %id, "discarded block");
        Ok(())
    }

    /// Compiles every root, in insertion order, into script text.
    ///
    /// Rules are separated by a blank line. The first evaluation failure aborts the whole
    /// compilation; no partial text is returned. Cycles are not detected.
    pub fn compile(&self) -> Result<String, EvaluationError> {
        tracing::debug!(rules = self.roots.len(), "compiling graph");
        let generator = CodeGenerator::new(self);
        let rules = self
            .roots
            .iter()
            .map(|root| generator.statements(*root).map(|lines| lines.join("\n")))
            .collect::<Result<Vec<_>, _>>()?;
        let code = rules.join("\n\n");
        tracing::debug!(bytes = code.len(), "compilation finished");
        Ok(code)
    }
}
