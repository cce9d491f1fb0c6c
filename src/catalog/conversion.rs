use super::{Catalog, Template, TypeTable};
use crate::error::CatalogError;
use crate::model::{BlockKind, BlockSpec, ConnectionType, Parameter, ParameterValue, PortSpec};

impl Template {
    /// Builds the declaration of a value or action block from this template.
    ///
    /// Arguments are visited in declaration order, which becomes the block's argument
    /// order. Argument names are lowercased.
    pub fn to_block_spec(
        &self,
        kind: BlockKind,
        types: &TypeTable,
    ) -> Result<BlockSpec, CatalogError> {
        let mut spec = match kind {
            BlockKind::Value => BlockSpec::value(&self.name),
            BlockKind::Action => BlockSpec::action(&self.name),
            BlockKind::Rule | BlockKind::Condition => {
                return Err(CatalogError::UnsupportedKind {
                    name: self.name.clone(),
                    kind,
                });
            }
        };

        for arg in &self.args {
            let name = arg.name.to_lowercase();
            match types.lookup(&arg.type_name) {
                Some(parameter_type) => {
                    let allowed: Vec<&str> = parameter_type
                        .allowed_values
                        .iter()
                        .map(String::as_str)
                        .collect();
                    spec.push_parameter_argument(Parameter::new(
                        name,
                        parameter_type.kind,
                        &allowed,
                        arg.default.as_ref().map(ParameterValue::from_json),
                    ));
                }
                None => spec
                    .push_input_argument(PortSpec::new(name, ConnectionType::Value))
                    .map_err(|source| CatalogError::InvalidTemplate {
                        template: self.name.clone(),
                        source,
                    })?,
            }
        }
        Ok(spec)
    }

    /// A one-line signature such as `Heal(player: input, amount: number)`.
    pub fn signature(&self, types: &TypeTable) -> String {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| match types.lookup(&arg.type_name) {
                Some(parameter_type) => {
                    format!("{}: {}", arg.name.to_lowercase(), parameter_type.kind)
                }
                None => format!("{}: input", arg.name.to_lowercase()),
            })
            .collect();
        format!("{}({})", self.name, args.join(", "))
    }
}

impl Catalog {
    /// Looks up an action template by name and builds its block declaration.
    pub fn action_spec(&self, name: &str, types: &TypeTable) -> Result<BlockSpec, CatalogError> {
        self.find_action(name)?.to_block_spec(BlockKind::Action, types)
    }

    /// Looks up a value template by name and builds its block declaration.
    pub fn value_spec(&self, name: &str, types: &TypeTable) -> Result<BlockSpec, CatalogError> {
        self.find_value(name)?.to_block_spec(BlockKind::Value, types)
    }
}
