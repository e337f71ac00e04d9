use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

use crate::{
    error::ArgumentError,
    types::{ArgumentValue, payload::FlattenedPayload},
};

use super::keys::{is_valid_key, validate_key};

/// Typed arguments for one camera effect share.
///
/// The public surface only lets callers set, read and remove values. The
/// flattened view consumed by the request builder is crate-internal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraEffectArguments {
    arguments: HashMap<String, ArgumentValue>,
}

impl CameraEffectArguments {
    pub fn new() -> Self {
        Self {
            arguments: HashMap::new(),
        }
    }

    // --- Internal Helper for Writing ---
    /// Validates the key, then stores the value, replacing whatever was there.
    fn insert(
        &mut self,
        key: String,
        value: ArgumentValue,
    ) -> Result<&mut Self, ArgumentError> {
        validate_key(&key)?;

        debug!(key = %key, kind = %value.kind(), "setting camera effect argument");
        if let Some(previous) = self.arguments.insert(key, value) {
            trace!(kind = %previous.kind(), "replaced previous argument value");
        }
        Ok(self)
    }

    // --- Mutation Methods (`set*`) ---

    /// Stores a string argument. Empty strings are allowed.
    pub fn set_string(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ArgumentError> {
        self.insert(key.into(), ArgumentValue::String(value.into()))
    }

    /// Stores a binary argument (e.g. image bytes) as-is.
    pub fn set_data(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Vec<u8>>,
    ) -> Result<&mut Self, ArgumentError> {
        self.insert(key.into(), ArgumentValue::Data(value.into()))
    }

    /// Stores an ordered list of strings. Order and duplicates are kept.
    pub fn set_string_array<I, S>(
        &mut self,
        key: impl Into<String>,
        values: I,
    ) -> Result<&mut Self, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.insert(key.into(), ArgumentValue::StringArray(values))
    }

    /// Removes the argument at `key`, returning it if it was present.
    pub fn remove(&mut self, key: &str) -> Option<ArgumentValue> {
        if !is_valid_key(key) {
            return None;
        }
        let removed = self.arguments.remove(key);
        if let Some(value) = &removed {
            debug!(key = %key, kind = %value.kind(), "removed camera effect argument");
        }
        removed
    }

    // --- Read Accessors ---

    pub fn get(&self, key: &str) -> Option<&ArgumentValue> {
        self.arguments.get(key)
    }

    /// Returns the string stored at `key`, or `None` if the key is absent or
    /// holds another kind of value.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ArgumentValue::as_str)
    }

    pub fn data(&self, key: &str) -> Option<&[u8]> {
        self.get(key).and_then(ArgumentValue::as_bytes)
    }

    pub fn string_array(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(ArgumentValue::as_string_array)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.arguments.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.arguments.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    // --- Flattening ---

    /// Builds the flattened payload from the current arguments.
    ///
    /// Every stored key appears exactly once with its value unchanged. The
    /// payload is rebuilt on each call and the store is left untouched.
    pub(crate) fn all_arguments(&self) -> FlattenedPayload {
        let entries: BTreeMap<String, ArgumentValue> = self
            .arguments
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        trace!(count = entries.len(), "flattened camera effect arguments");
        FlattenedPayload::from_entries(entries)
    }
}
