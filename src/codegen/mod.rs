//! Recursive evaluation of blocks into script text.
//!
//! Value blocks produce a single inline expression. Action, rule and condition blocks produce
//! ordered statement lines. Nothing is cached: a block reached through several paths is
//! evaluated and emitted again at every occurrence.

use crate::error::EvaluationError;
use crate::graph::Graph;
use crate::model::{
    ArgumentSlot, Block, BlockId, BlockKind, CONDITION_LEFT_INPUT, CONDITION_OPERATOR,
    CONDITION_RIGHT_INPUT, PortDirection, PortId, RULE_ACTION_OUTPUT, RULE_CONDITIONS_INPUT,
};
use itertools::Itertools;

mod layout;

pub use layout::{render_rule, INDENT};

/// The text produced by evaluating one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Expression(String),
    Statements(Vec<String>),
}

pub struct CodeGenerator<'a> {
    graph: &'a Graph,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Evaluates a block according to its kind.
    pub fn evaluate(&self, id: BlockId) -> Result<Evaluation, EvaluationError> {
        let block = self.block(id)?;
        match block.kind {
            BlockKind::Value => self.value(id, block).map(Evaluation::Expression),
            BlockKind::Action => self.action(id, block).map(Evaluation::Statements),
            BlockKind::Rule => self.rule(id, block).map(Evaluation::Statements),
            BlockKind::Condition => self.condition(id, block).map(Evaluation::Statements),
        }
    }

    /// Evaluates a block that must yield an inline expression.
    pub fn expression(&self, id: BlockId) -> Result<String, EvaluationError> {
        let block = self.block(id)?;
        match block.kind {
            BlockKind::Value => self.value(id, block),
            kind => Err(EvaluationError::NotAnExpression {
                block: id,
                block_name: block.name.clone(),
                kind,
            }),
        }
    }

    /// Evaluates a block that must yield statement lines.
    pub fn statements(&self, id: BlockId) -> Result<Vec<String>, EvaluationError> {
        let block = self.block(id)?;
        match block.kind {
            BlockKind::Action => self.action(id, block),
            BlockKind::Rule => self.rule(id, block),
            BlockKind::Condition => self.condition(id, block),
            kind @ BlockKind::Value => Err(EvaluationError::NotAStatement {
                block: id,
                block_name: block.name.clone(),
                kind,
            }),
        }
    }

    /// `Name(arg0, arg1, ...)`
    fn value(&self, id: BlockId, block: &Block) -> Result<String, EvaluationError> {
        Ok(format!("{}({})", block.name, self.arguments(id, block)?))
    }

    /// `Name(args);` followed by every block chained after it, output by output.
    fn action(&self, id: BlockId, block: &Block) -> Result<Vec<String>, EvaluationError> {
        let mut lines = vec![format!("{}({});", block.name, self.arguments(id, block)?)];
        for output in &block.outputs {
            for target in self.graph.targets(*output) {
                lines.extend(self.statements(self.owner(*target)?)?);
            }
        }
        Ok(lines)
    }

    fn rule(&self, id: BlockId, block: &Block) -> Result<Vec<String>, EvaluationError> {
        let mut conditions = Vec::new();
        for source in self.connected(id, RULE_CONDITIONS_INPUT, PortDirection::Input) {
            conditions.extend(self.statements(self.owner(*source)?)?);
        }

        let entry = self
            .connected(id, RULE_ACTION_OUTPUT, PortDirection::Output)
            .first();
        let actions = match entry {
            Some(first) => self.statements(self.owner(*first)?)?,
            None => Vec::new(),
        };

        let event = self.parameter(id, block, "event")?;
        let team = self.parameter(id, block, "team")?;
        let player = self.parameter(id, block, "player")?;
        Ok(render_rule(&block.name, &event, &team, &player, &conditions, &actions))
    }

    /// One `left op right;` line per left operand, sharing a single evaluation of the right side.
    fn condition(&self, id: BlockId, block: &Block) -> Result<Vec<String>, EvaluationError> {
        let right = self
            .connected(id, CONDITION_RIGHT_INPUT, PortDirection::Input)
            .first()
            .ok_or(EvaluationError::MissingRightOperand(id))?;
        let right = self.expression(self.owner(*right)?)?;
        let operator = self.parameter(id, block, CONDITION_OPERATOR)?;

        let mut lines = Vec::new();
        for left in self.connected(id, CONDITION_LEFT_INPUT, PortDirection::Input) {
            let left = self.expression(self.owner(*left)?)?;
            lines.push(format!("{} {} {};", left, operator, right));
        }
        Ok(lines)
    }

    /// Builds the argument list by walking the declared argument order.
    fn arguments(&self, id: BlockId, block: &Block) -> Result<String, EvaluationError> {
        let mut parameters = block.parameters.iter();
        let mut args = Vec::with_capacity(block.argument_order.len());
        for slot in &block.argument_order {
            match slot {
                ArgumentSlot::Input(name) => {
                    let source = self
                        .connected(id, name, PortDirection::Input)
                        .first()
                        .ok_or_else(|| EvaluationError::MissingConnection {
                            block: id,
                            block_name: block.name.clone(),
                            input: name.clone(),
                        })?;
                    args.push(self.expression(self.owner(*source)?)?);
                }
                ArgumentSlot::Parameter(name) => {
                    let parameter =
                        parameters
                            .next()
                            .ok_or_else(|| EvaluationError::MissingParameter {
                                block: id,
                                block_name: block.name.clone(),
                                parameter: name.clone(),
                            })?;
                    args.push(parameter.render());
                }
            }
        }
        Ok(args.iter().join(", "))
    }

    fn connected(&self, id: BlockId, port: &str, direction: PortDirection) -> &'a [PortId] {
        let port = match direction {
            PortDirection::Input => self.graph.input(id, port),
            PortDirection::Output => self.graph.output(id, port),
        };
        port.map(|p| self.graph.targets(p)).unwrap_or(&[])
    }

    fn parameter(&self, id: BlockId, block: &Block, name: &str) -> Result<String, EvaluationError> {
        block
            .parameter(name)
            .map(|p| p.render())
            .ok_or_else(|| EvaluationError::MissingParameter {
                block: id,
                block_name: block.name.clone(),
                parameter: name.to_string(),
            })
    }

    fn block(&self, id: BlockId) -> Result<&'a Block, EvaluationError> {
        self.graph.block(id).ok_or(EvaluationError::UnknownBlock(id))
    }

    fn owner(&self, port: PortId) -> Result<BlockId, EvaluationError> {
        self.graph
            .owner(port)
            .ok_or(EvaluationError::DanglingPort(port))
    }
}
