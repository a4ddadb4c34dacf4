use strum::VariantNames;

use crate::error::TtsError;

/// Voice presets offered by the speech model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::AsRefStr, strum::VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum Voice {
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl Voice {
    /// Parse a wire voice name, matching case-sensitively
    pub fn parse(name: &str) -> crate::error::Result<Self> {
        name.parse().map_err(|_| TtsError::InvalidVoice {
            given: name.to_owned(),
            allowed: Self::VARIANTS.join(", "),
        })
    }
}
