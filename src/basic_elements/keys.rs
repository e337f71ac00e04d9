use tracing::warn;

use crate::error::ArgumentError;

/// Checks that `key` can name a camera effect argument.
///
/// Keys are matched case-sensitively against the effect's declared parameter
/// names, so nothing beyond emptiness is checked here.
pub fn validate_key(key: &str) -> Result<(), ArgumentError> {
    if key.is_empty() {
        warn!("rejected camera effect argument with an empty key");
        return Err(ArgumentError::InvalidArgumentKey);
    }
    Ok(())
}

pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
}
