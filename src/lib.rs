pub mod basic_elements;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod types;

pub use basic_elements::args::CameraEffectArguments;
pub use error::ArgumentError;
pub use helpers::share_parameters::build_share_parameters;
pub use types::{
    ArgumentKind, ArgumentValue, content::CameraEffectContent, payload::FlattenedPayload,
};

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::Result;

    #[test]
    fn test_share_camera_effect_with_image_argument() -> Result<()> {
        let image = vec![0x89u8, b'P', b'N', b'G'];

        let mut arguments = CameraEffectArguments::new();
        arguments
            .set_string("caption", "sunset")?
            .set_data("overlay", image.clone())?;
        assert_eq!(arguments.data("overlay"), Some(&image[..]));

        let content = CameraEffectContent::new("98765").with_arguments(arguments);
        let parameters = build_share_parameters(&content)?;

        assert_eq!(
            parameters.get(constants::EFFECT_ARGUMENTS_PARAMETER),
            Some(&serde_json::json!(
                r#"{"caption":"sunset","overlay":[137,80,78,71]}"#
            ))
        );

        Ok(())
    }
}
