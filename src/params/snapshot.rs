use super::value::ParamValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The key-to-value mapping of one node's configured parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSnapshot(BTreeMap<String, ParamValue>);

impl ParameterSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for ParameterSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Node id to parameter snapshot.
///
/// Entries are replaced wholesale on update and are never removed, so a
/// deleted node's last snapshot is still handed to the code generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterMap(BTreeMap<String, ParameterSnapshot>);

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, node_id: impl Into<String>, snapshot: ParameterSnapshot) {
        self.0.insert(node_id.into(), snapshot);
    }

    pub fn get(&self, node_id: &str) -> Option<&ParameterSnapshot> {
        self.0.get(node_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParameterSnapshot)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The map as the plain JSON object posted to the code generator.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(id, snapshot)| (id.clone(), snapshot.to_json()))
                .collect(),
        )
    }
}
