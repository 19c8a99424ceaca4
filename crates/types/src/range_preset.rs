use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, VariantNames};

#[derive(Copy, Clone, Debug, PartialEq, Hash, Eq, EnumString, VariantNames, Display, Default, Deserialize, Serialize, EnumIter)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum RangePreset {
    #[serde(rename = "full")]
    Full,
    #[default]
    #[serde(rename = "wide")]
    Wide,
    #[serde(rename = "narrow")]
    Narrow,
    #[serde(rename = "custom")]
    Custom,
}

impl RangePreset {
    /// Distance in ticks from the current tick to each bound, `None` for custom ranges.
    pub fn half_width(&self) -> Option<i32> {
        match self {
            RangePreset::Full => Some(887200),
            RangePreset::Wide => Some(40000),
            RangePreset::Narrow => Some(4000),
            RangePreset::Custom => None,
        }
    }
}
