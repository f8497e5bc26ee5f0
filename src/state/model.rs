use serde::{Deserialize, Serialize};

use super::param::ParamValue;

/// Declared for shape compatibility with external consumers of the
/// exported model; nothing in the editor populates or reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "colorId")]
    pub color_id: u32,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "parameterValues")]
    pub param_values: Vec<ParamValue>,
    pub colors: Vec<Color>,
}
