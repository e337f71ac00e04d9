use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    basic_elements::serializers::payload_to_json_string, constants::ShareParameter,
    types::content::CameraEffectContent,
};

// Builds the parameter dictionary handed to the sharing platform client
pub fn build_share_parameters(content: &CameraEffectContent) -> Result<Map<String, Value>> {
    content
        .validate()
        .context("Invalid camera effect content")?;

    let mut parameters = Map::new();

    if let Some(effect_id) = content.effect_id.as_deref().filter(|id| !id.is_empty()) {
        parameters.insert(
            ShareParameter::EffectId.name().to_string(),
            Value::String(effect_id.to_string()),
        );
    }

    if let Some(arguments) = &content.effect_arguments {
        let payload = arguments.all_arguments();
        let encoded = payload_to_json_string(&payload)
            .context("Failed to encode camera effect arguments")?;
        debug!(count = payload.len(), "encoded camera effect arguments");
        parameters.insert(
            ShareParameter::EffectArguments.name().to_string(),
            Value::String(encoded),
        );
    }

    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{basic_elements::args::CameraEffectArguments, error::ArgumentError};
    use serde_json::json;

    #[test]
    fn test_parameters_for_full_content() -> Result<()> {
        let mut arguments = CameraEffectArguments::new();
        arguments
            .set_string("caption", "hello")?
            .set_string_array("tags", ["b", "a", "b"])?;
        let content = CameraEffectContent::new("1234").with_arguments(arguments);

        let parameters = build_share_parameters(&content)?;
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters.get("effect_id"), Some(&json!("1234")));

        let encoded = parameters
            .get("effect_arguments")
            .and_then(Value::as_str)
            .context("effect_arguments missing")?;
        let decoded: Value = serde_json::from_str(encoded)?;
        assert_eq!(decoded, json!({ "caption": "hello", "tags": ["b", "a", "b"] }));

        Ok(())
    }

    #[test]
    fn test_empty_arguments_are_still_sent() -> Result<()> {
        let content = CameraEffectContent::default().with_arguments(CameraEffectArguments::new());

        let parameters = build_share_parameters(&content)?;
        assert!(!parameters.contains_key("effect_id"));
        assert_eq!(parameters.get("effect_arguments"), Some(&json!("{}")));

        Ok(())
    }

    #[test]
    fn test_missing_arguments_are_omitted() -> Result<()> {
        let parameters = build_share_parameters(&CameraEffectContent::new(""))?;
        assert!(parameters.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_effect_id_is_rejected() {
        let content = CameraEffectContent::new("not-a-number");

        let err = build_share_parameters(&content).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ArgumentError>(),
            Some(ArgumentError::InvalidEffectId(_))
        ));
    }
}
