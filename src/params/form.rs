use super::snapshot::ParameterSnapshot;
use super::value::{ParamValue, coerce};
use crate::schema::{self, ParameterKind, StepSchema};

/// How a single field should be presented.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldControl {
    /// Drop-down over a fixed option list.
    Select { options: &'static [&'static str] },
    /// Free input. `numeric` inputs only accept numbers; booleans are typed as text.
    Input { numeric: bool },
}

/// One rendered input of a step parameter form.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub key: &'static str,
    pub label: String,
    pub control: FieldControl,
    pub placeholder: String,
    pub value: Option<ParamValue>,
}

/// The single event emitted by a form after each change.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterUpdate {
    pub step_title: &'static str,
    pub snapshot: ParameterSnapshot,
}

/// Input form for the parameters of one pipeline step.
///
/// The form holds a working copy of the snapshot; every accepted change
/// produces a full `ParameterUpdate` for the owner to store.
#[derive(Debug, Clone)]
pub struct StepParameterForm {
    step: u32,
    schema: &'static StepSchema,
    snapshot: ParameterSnapshot,
}

impl StepParameterForm {
    pub fn new(step: u32) -> Self {
        Self::with_snapshot(step, ParameterSnapshot::new())
    }

    /// Creates a form seeded with previously stored values.
    pub fn with_snapshot(step: u32, snapshot: ParameterSnapshot) -> Self {
        Self {
            step,
            schema: schema::lookup(step),
            snapshot,
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn schema(&self) -> &'static StepSchema {
        self.schema
    }

    pub fn snapshot(&self) -> &ParameterSnapshot {
        &self.snapshot
    }

    /// Produces one field per parameter definition, in schema order.
    pub fn render(&self) -> Vec<FieldView> {
        self.schema
            .parameters
            .iter()
            .map(|def| {
                let (control, placeholder) = match def.kind {
                    ParameterKind::Select(options) => (
                        FieldControl::Select { options },
                        format!("Select {}", def.name),
                    ),
                    kind => (
                        FieldControl::Input {
                            numeric: kind == ParameterKind::Number,
                        },
                        format!("Enter {}", def.name),
                    ),
                };
                FieldView {
                    key: def.name,
                    label: display_label(def.name),
                    control,
                    placeholder,
                    value: self.snapshot.get(def.name).cloned(),
                }
            })
            .collect()
    }

    /// Coerces `raw` per the declared type of `key` and merges it into the snapshot.
    ///
    /// Returns `None` when the schema has no parameter named `key`.
    pub fn on_change(&mut self, key: &str, raw: &str) -> Option<ParameterUpdate> {
        let Some(def) = self.schema.parameter(key) else {
            log::debug!(
                "Ignoring change to unknown parameter '{}' on step '{}'",
                key,
                self.schema.title
            );
            return None;
        };
        self.snapshot.insert(def.name, coerce(def.kind, raw));
        Some(ParameterUpdate {
            step_title: self.schema.title,
            snapshot: self.snapshot.clone(),
        })
    }
}

/// `sample_size` -> `SAMPLE SIZE`
fn display_label(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}
