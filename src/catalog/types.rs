use crate::model::ParameterKind;
use ahash::AHashMap;

/// How a template argument type becomes a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterType {
    pub kind: ParameterKind,
    pub allowed_values: Vec<String>,
}

/// Lookup from lowercased argument type name to parameter type.
///
/// Argument types found in the table become parameters; every other type becomes a
/// VALUE input that must be wired.
#[derive(Debug, Clone)]
pub struct TypeTable {
    entries: AHashMap<String, ParameterType>,
}

pub struct TypeTableBuilder {
    entries: AHashMap<String, ParameterType>,
}

impl TypeTableBuilder {
    pub fn new() -> Self {
        let mut entries = AHashMap::new();
        register_default_types(&mut entries);
        Self { entries }
    }

    /// Starts from an empty table instead of the built-in one.
    pub fn empty() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Adds or replaces the parameter type used for `type_name`.
    pub fn with_parameter_type(
        mut self,
        type_name: &str,
        kind: ParameterKind,
        allowed_values: &[&str],
    ) -> Self {
        self.entries.insert(
            type_name.to_lowercase(),
            ParameterType {
                kind,
                allowed_values: allowed_values.iter().map(|v| v.to_string()).collect(),
            },
        );
        self
    }

    /// Makes `type_name` resolve to a wired input again.
    pub fn without_parameter_type(mut self, type_name: &str) -> Self {
        self.entries.remove(&type_name.to_lowercase());
        self
    }

    pub fn build(self) -> TypeTable {
        TypeTable {
            entries: self.entries,
        }
    }
}

impl Default for TypeTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    pub fn builder() -> TypeTableBuilder {
        TypeTableBuilder::new()
    }

    /// Case-insensitive lookup. `None` means the argument is a wired input.
    pub fn lookup(&self, type_name: &str) -> Option<&ParameterType> {
        self.entries.get(&type_name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        TypeTableBuilder::new().build()
    }
}

macro_rules! define_parameter_types {
    ( $( ($type_name:expr, $kind:ident, [$($value:expr),* $(,)?]) ),* $(,)? ) => {
        fn register_default_types(entries: &mut AHashMap<String, ParameterType>) {
            $(
                entries.insert(
                    $type_name.to_string(),
                    ParameterType {
                        kind: ParameterKind::$kind,
                        allowed_values: vec![$($value.to_string()),*],
                    },
                );
            )*
        }
    };
}

define_parameter_types! {
    ("number constant", Number, []),
    ("team constant", Enumerated, ["All", "Team 1", "Team 2"]),
    ("string constant", Text, []),
    ("hero constant", Text, []),
    ("play effect", Text, []),
    ("create effect", Text, []),
    ("communicate", Text, []),
    ("icon", Text, []),
    ("relative", Enumerated, ["To Player", "To World"]),
    ("motion", Enumerated, ["Cancel Contrary Motion", "Incorporate Contrary Motion"]),
    ("rounding type", Enumerated, ["Down", "To Nearest", "Up"]),
    ("los check", Enumerated, ["Off", "Surfaces", "Surfaces and Barriers", "Surfaces and Enemy Barriers"]),
    ("world text clipping", Enumerated, ["Clip Against Surfaces", "Do Not Clip"]),
    ("hud location", Enumerated, ["Left", "Right", "Top"]),
    ("icon reevaluation", Enumerated, ["None", "Position", "Visible To", "Visible To and Position"]),
    ("effect reevaluation", Enumerated, ["None", "Position and Radius", "Visible To", "Visible to, Position, and Radius"]),
    ("hud text reevaluation", Enumerated, ["String", "Visible To and String"]),
    ("world text reevaluation", Enumerated, ["String", "Visible To and String", "Visible To, Position, and String"]),
    ("chase rate reevaluation", Enumerated, ["Destination and Rate", "None"]),
    ("chase time reevaluation", Enumerated, ["Destination and Duration", "None"]),
    ("objective description reevaluation", Enumerated, ["String", "Visible To and String"]),
    ("damage modification reevaluation", Enumerated, ["None", "Receivers and Damagers", "Receivers, Damagers, and Damage Percent"]),
    ("wait behavior", Enumerated, ["Abort When False", "Ignore Condition", "Restart When True"]),
    ("barriers los", Enumerated, ["All Barriers Block LOS", "Barriers Do Not Block LOS", "Enemy Barriers Block LOS"]),
    ("status", Enumerated, ["Asleep", "Burning", "Frozen", "Hacked", "Invincible", "Knocked Down", "Phased Out", "Rooted", "Stunned", "Unkillable"]),
    ("compare operator", Enumerated, ["==", "!=", "<", "<=", ">", ">="]),
    ("variable", Text, []),
    ("operation", Enumerated, ["Add", "Append To Array", "Divide", "Max", "Min", "Modulo", "Multiply", "Raise To Power", "Remove From Array by Index", "Remove From Array by Value", "Subtract"]),
    ("button", Enumerated, ["Ability 1", "Ability 2", "Crouch", "Interact", "Jump", "Primary Fire", "Secondary Fire", "Ultimate"]),
    ("color", Enumerated, ["Blue", "Green", "Purple", "Red", "Team 1", "Team 2", "White", "Yellow"]),
    ("invisible to", Enumerated, ["All", "Enemies", "None"]),
    ("transformation", Enumerated, ["Rotation", "Rotation and Translation"]),
}
