use serde_json::Value;

use crate::{error::ArgumentError, types::payload::FlattenedPayload};

// Convert a flattened payload to a JSON value
pub fn payload_to_json_value(payload: &FlattenedPayload) -> Result<Value, ArgumentError> {
    Ok(serde_json::to_value(payload)?)
}

// Convert a flattened payload to a compact JSON string
pub fn payload_to_json_string(payload: &FlattenedPayload) -> Result<String, ArgumentError> {
    Ok(serde_json::to_string(payload)?)
}
