use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    Seconds,
    Meters,
}

/// A provider measurement: the formatted text is kept verbatim, the raw value
/// is always in seconds (durations) or meters (distances).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    #[serde(rename = "text")]
    pub display_text: String,

    #[serde(rename = "value")]
    pub raw_value: i64,

    #[serde(rename = "value_unit")]
    pub unit: MeasurementUnit,
}

impl Measurement {
    pub fn seconds(display_text: impl Into<String>, raw_value: i64) -> Self {
        Self {
            display_text: display_text.into(),
            raw_value,
            unit: MeasurementUnit::Seconds,
        }
    }

    pub fn meters(display_text: impl Into<String>, raw_value: i64) -> Self {
        Self {
            display_text: display_text.into(),
            raw_value,
            unit: MeasurementUnit::Meters,
        }
    }
}
