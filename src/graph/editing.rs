use super::Graph;
use crate::error::{GraphError, ParameterError};
use crate::model::{BlockId, Parameter, ParameterKind, ParameterValue};

impl Graph {
    /// Assigns a parameter value, validated against the parameter's kind.
    pub fn set_parameter(
        &mut self,
        block: BlockId,
        name: &str,
        value: impl Into<ParameterValue>,
    ) -> Result<(), ParameterError> {
        let parameter = self
            .block_mut(block)
            .ok_or(ParameterError::UnknownBlock(block))?
            .parameters
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| ParameterError::Unknown {
                block,
                name: name.to_string(),
            })?;

        parameter.value = validate(parameter, value.into())?;
        tracing::trace!(%block, parameter = name, value = %parameter.value, "parameter assigned");
        Ok(())
    }

    pub fn set_name(&mut self, block: BlockId, name: impl Into<String>) -> Result<(), GraphError> {
        let block = self
            .block_mut(block)
            .ok_or(GraphError::UnknownBlock(block))?;
        block.name = name.into();
        Ok(())
    }
}

fn validate(parameter: &Parameter, value: ParameterValue) -> Result<ParameterValue, ParameterError> {
    match parameter.kind {
        ParameterKind::Text => Ok(ParameterValue::Text(value.to_string())),
        ParameterKind::Number => {
            let number = match &value {
                ParameterValue::Number(n) => Some(*n),
                ParameterValue::Text(text) => text.trim().parse::<f64>().ok(),
            };
            // The script parser has no spelling for NaN or infinities.
            match number {
                Some(n) if n.is_finite() => Ok(ParameterValue::Number(n)),
                _ => Err(ParameterError::InvalidNumber {
                    name: parameter.name.clone(),
                    value: value.to_string(),
                }),
            }
        }
        ParameterKind::Enumerated => {
            let text = value.to_string();
            if parameter.allowed_values.iter().any(|allowed| *allowed == text) {
                Ok(ParameterValue::Text(text))
            } else {
                Err(ParameterError::NotAllowed {
                    name: parameter.name.clone(),
                    value: text,
                    allowed: parameter.allowed_values.join(", "),
                })
            }
        }
    }
}
