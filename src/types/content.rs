use tracing::warn;

use crate::{basic_elements::args::CameraEffectArguments, error::ArgumentError};

/// A camera effect to share: the effect's identifier plus its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraEffectContent {
    pub effect_id: Option<String>,
    pub effect_arguments: Option<CameraEffectArguments>,
}

impl CameraEffectContent {
    pub fn new(effect_id: impl Into<String>) -> Self {
        Self {
            effect_id: Some(effect_id.into()),
            effect_arguments: None,
        }
    }

    pub fn with_arguments(mut self, arguments: CameraEffectArguments) -> Self {
        self.effect_arguments = Some(arguments);
        self
    }

    /// A missing or empty effect id is accepted; anything else must be all
    /// ASCII digits.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        match self.effect_id.as_deref() {
            Some(id) if !id.bytes().all(|b| b.is_ascii_digit()) => {
                warn!(effect_id = %id, "rejected camera effect id");
                Err(ArgumentError::InvalidEffectId(id.to_string()))
            }
            _ => Ok(()),
        }
    }
}
