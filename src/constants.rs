// Parameter names understood by the sharing platform for camera effect shares.
pub const EFFECT_ID_PARAMETER: &str = "effect_id";
pub const EFFECT_ARGUMENTS_PARAMETER: &str = "effect_arguments";

pub enum ShareParameter {
    EffectId,
    EffectArguments,
}

impl ShareParameter {
    pub fn name(&self) -> &'static str {
        match self {
            ShareParameter::EffectId => EFFECT_ID_PARAMETER,
            ShareParameter::EffectArguments => EFFECT_ARGUMENTS_PARAMETER,
        }
    }
}
