use serde::{Deserialize, Serialize};

/// Color tokens consumed by the styling pipeline.
///
/// Symbolic names map to hex values; there is no runtime behavior beyond
/// lookup. Serialized keys keep the camelCase form the pipeline expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub ssps_blue: String,
    pub ssps_gray: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            ssps_blue: "#406280".to_string(),
            ssps_gray: "#e6e6e6".to_string(),
        }
    }
}

impl Theme {
    /// Resolves a symbolic color name to its value.
    pub fn color(&self, name: &str) -> Option<&str> {
        match name {
            "sspsBlue" => Some(&self.ssps_blue),
            "sspsGray" => Some(&self.ssps_gray),
            _ => None,
        }
    }
}
