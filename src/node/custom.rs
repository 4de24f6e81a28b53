use crate::error::WorkspaceError;
use crate::params::{ParamValue, parse_number};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a user-defined parameter. Select carries its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomParameterType {
    String,
    Number,
    Boolean,
    Select(Vec<String>),
}

impl CustomParameterType {
    /// Coerces raw input into a value of this type.
    pub fn coerce(&self, raw: &str) -> ParamValue {
        match self {
            CustomParameterType::String => ParamValue::Text(raw.to_string()),
            CustomParameterType::Number => ParamValue::Number(parse_number(raw)),
            CustomParameterType::Boolean => ParamValue::Boolean(raw == "true"),
            CustomParameterType::Select(options) => ParamValue::Enum {
                selected: raw.to_string(),
                options: options.clone(),
            },
        }
    }

    pub fn tag(&self) -> ParameterTypeTag {
        match self {
            CustomParameterType::String => ParameterTypeTag::String,
            CustomParameterType::Number => ParameterTypeTag::Number,
            CustomParameterType::Boolean => ParameterTypeTag::Boolean,
            CustomParameterType::Select(_) => ParameterTypeTag::Select,
        }
    }
}

/// A user-defined parameter on a custom node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomParameter {
    pub label: String,
    pub kind: CustomParameterType,
    /// `None` until the user first enters a value.
    pub value: Option<ParamValue>,
}

impl CustomParameter {
    pub fn set_raw_value(&mut self, raw: &str) {
        self.value = Some(self.kind.coerce(raw));
    }

    /// The value as shown in its input, empty while unset.
    pub fn display_value(&self) -> String {
        self.value.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// The type choice offered by the add-parameter form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParameterTypeTag {
    #[default]
    String,
    Number,
    Boolean,
    Select,
}

impl fmt::Display for ParameterTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ParameterTypeTag::String => "string",
            ParameterTypeTag::Number => "number",
            ParameterTypeTag::Boolean => "boolean",
            ParameterTypeTag::Select => "select",
        };
        f.write_str(tag)
    }
}

impl FromStr for ParameterTypeTag {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ParameterTypeTag::String),
            "number" => Ok(ParameterTypeTag::Number),
            "boolean" => Ok(ParameterTypeTag::Boolean),
            "select" => Ok(ParameterTypeTag::Select),
            other => Err(WorkspaceError::UnknownParameterType(other.to_string())),
        }
    }
}

/// In-progress state of the add-parameter form.
///
/// Discarded on cancel; `commit` turns it into a `CustomParameter`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterDraft {
    pub label: String,
    pub type_tag: ParameterTypeTag,
    /// Comma-separated options, only consulted for `select`.
    pub options: String,
}

impl ParameterDraft {
    pub fn new(label: impl Into<String>, type_tag: ParameterTypeTag) -> Self {
        Self {
            label: label.into(),
            type_tag,
            options: String::new(),
        }
    }

    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }

    /// Validates the draft and builds the parameter with no value set.
    pub fn commit(self) -> Result<CustomParameter, WorkspaceError> {
        let label = self.label.trim().to_string();
        if label.is_empty() {
            return Err(WorkspaceError::EmptyParameterLabel);
        }

        let kind = match self.type_tag {
            ParameterTypeTag::String => CustomParameterType::String,
            ParameterTypeTag::Number => CustomParameterType::Number,
            ParameterTypeTag::Boolean => CustomParameterType::Boolean,
            ParameterTypeTag::Select => {
                let options = parse_options(&self.options);
                if options.is_empty() {
                    return Err(WorkspaceError::SelectWithoutOptions { label });
                }
                CustomParameterType::Select(options)
            }
        };

        Ok(CustomParameter {
            label,
            kind,
            value: None,
        })
    }
}

/// Splits a comma-separated option list, trimming each segment.
///
/// `"a, b ,c"` yields `["a", "b", "c"]`. Blank segments are dropped.
pub fn parse_options(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect_vec()
}
