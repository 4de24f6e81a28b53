use std::fmt;

/// The declared type of a single step parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Free-form text input.
    Text,
    /// Numeric input, coerced with a lenient numeric parse.
    Number,
    /// Boolean input, `true` only for the literal string `"true"`.
    Boolean,
    /// A single choice out of a fixed, ordered option list.
    Select(&'static [&'static str]),
}

impl ParameterKind {
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match *self {
            ParameterKind::Select(options) => Some(options),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKind::Text => write!(f, "string"),
            ParameterKind::Number => write!(f, "number"),
            ParameterKind::Boolean => write!(f, "boolean"),
            ParameterKind::Select(options) => write!(f, "select[{}]", options.join("|")),
        }
    }
}

/// A named, typed parameter of a pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub name: &'static str,
    pub kind: ParameterKind,
}

impl ParameterDefinition {
    pub const fn new(name: &'static str, kind: ParameterKind) -> Self {
        Self { name, kind }
    }
}

/// The ordered parameter set of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSchema {
    pub title: &'static str,
    pub parameters: Vec<ParameterDefinition>,
}

impl StepSchema {
    /// Finds a parameter definition by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterDefinition> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
