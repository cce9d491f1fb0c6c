use crate::error::CatalogError;
use crate::model::BlockKind;
use serde::{Deserialize, Serialize};
use std::fs;

/// The complete template catalog, as shipped with the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub actions: Vec<Template>,
    #[serde(default)]
    pub values: Vec<Template>,
}

/// A block template: its script name and declared arguments, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub args: Vec<TemplateArg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateArg {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path, bytes = content.len(), "loading template catalog");
        Self::from_json(&content)
    }

    /// Templates whose name contains `search`, ignoring case. An empty search keeps everything.
    pub fn filter(&self, search: &str) -> Catalog {
        let search = search.trim().to_lowercase();
        if search.is_empty() {
            return self.clone();
        }
        let matches = |templates: &[Template]| -> Vec<Template> {
            templates
                .iter()
                .filter(|t| t.name.to_lowercase().contains(&search))
                .cloned()
                .collect()
        };
        Catalog {
            actions: matches(&self.actions),
            values: matches(&self.values),
        }
    }

    pub fn find_action(&self, name: &str) -> Result<&Template, CatalogError> {
        Self::find(&self.actions, name, BlockKind::Action)
    }

    pub fn find_value(&self, name: &str) -> Result<&Template, CatalogError> {
        Self::find(&self.values, name, BlockKind::Value)
    }

    fn find<'a>(
        templates: &'a [Template],
        name: &str,
        kind: BlockKind,
    ) -> Result<&'a Template, CatalogError> {
        templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| CatalogError::UnknownTemplate {
                kind,
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.actions.len() + self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.values.is_empty()
    }
}
