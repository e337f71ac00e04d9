use serde::Serialize;
use std::collections::BTreeMap;

use super::ArgumentValue;

/// Read-only, string-keyed view of a set of camera effect arguments.
///
/// Built fresh by the argument store on every request and only inside this
/// crate. Values are carried through untouched: bytes are not re-encoded and
/// arrays keep their order. Iteration happens to be sorted by key, but callers
/// should treat the payload as an unordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlattenedPayload {
    entries: BTreeMap<String, ArgumentValue>,
}

impl FlattenedPayload {
    pub(crate) fn from_entries(entries: BTreeMap<String, ArgumentValue>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&ArgumentValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Hands the underlying map to the consumer.
    pub fn into_inner(self) -> BTreeMap<String, ArgumentValue> {
        self.entries
    }
}
