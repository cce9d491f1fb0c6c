use std::fmt;

/// How a parameter is edited and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Text,
    Number,
    Enumerated,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKind::Text => write!(f, "text"),
            ParameterKind::Number => write!(f, "number"),
            ParameterKind::Enumerated => write!(f, "enumerated"),
        }
    }
}

/// The current or default value of a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Text(String),
    Number(f64),
}

impl ParameterValue {
    pub fn text(value: impl Into<String>) -> Self {
        ParameterValue::Text(value.into())
    }

    /// Converts a catalog `default` entry into a value.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(ParameterValue::Number)
                .unwrap_or_else(|| ParameterValue::Text(n.to_string())),
            serde_json::Value::String(s) => ParameterValue::Text(s.clone()),
            other => ParameterValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Text(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Number(value as f64)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Number(value as f64)
    }
}

/// 2^53, the largest magnitude below which every whole `f64` maps exactly onto an `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// Whole numbers are written without a fractional part, which is what the script parser expects.
impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            ParameterValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A configurable leaf value owned by a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    /// Only meaningful for [`ParameterKind::Enumerated`].
    pub allowed_values: Vec<String>,
    pub default: ParameterValue,
    pub value: ParameterValue,
}

impl Parameter {
    /// Creates a parameter, falling back to a kind-appropriate default when none is given.
    pub fn new(
        name: impl Into<String>,
        kind: ParameterKind,
        allowed_values: &[&str],
        default: Option<ParameterValue>,
    ) -> Self {
        let allowed_values: Vec<String> = allowed_values.iter().map(|v| v.to_string()).collect();
        let default = default.unwrap_or_else(|| match kind {
            ParameterKind::Number => ParameterValue::Number(0.0),
            ParameterKind::Text => ParameterValue::Text(String::new()),
            ParameterKind::Enumerated => {
                ParameterValue::Text(allowed_values.first().cloned().unwrap_or_default())
            }
        });
        Self {
            name: name.into(),
            kind,
            allowed_values,
            value: default.clone(),
            default,
        }
    }

    pub fn text(name: impl Into<String>, default: Option<&str>) -> Self {
        Self::new(name, ParameterKind::Text, &[], default.map(ParameterValue::text))
    }

    pub fn number(name: impl Into<String>, default: Option<f64>) -> Self {
        Self::new(name, ParameterKind::Number, &[], default.map(ParameterValue::Number))
    }

    pub fn enumerated(name: impl Into<String>, allowed_values: &[&str], default: Option<&str>) -> Self {
        Self::new(
            name,
            ParameterKind::Enumerated,
            allowed_values,
            default.map(ParameterValue::text),
        )
    }

    /// The literal text emitted for this parameter in generated code.
    pub fn render(&self) -> String {
        self.value.to_string()
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }
}
