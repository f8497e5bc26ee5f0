use serde::{Deserialize, Serialize};

pub type ParamId = u32;

/// The kind of value a parameter holds. Closed enum — the editor row
/// rendering, the value-widget selection, and the add dialog all match
/// exhaustively, so a new kind is a compile-visible change in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "number")]
    Number,
}

impl ValueKind {
    /// Label shown in the type column and the add dialog selector
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Text => "string",
            ValueKind::Number => "number",
        }
    }

    /// Cycle to the other kind (add dialog type selector)
    pub fn next(&self) -> Self {
        match self {
            ValueKind::Text => ValueKind::Number,
            ValueKind::Number => ValueKind::Text,
        }
    }
}

/// A user-defined parameter slot. Identity is `id`, unique within the
/// active sequence; never mutated after creation except by removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Display form for the editor row. f64 Display renders integral
    /// values bare ("3", not "3.0") and never loses digits to a cast.
    pub fn display(&self) -> String {
        match self {
            Value::Number(n) => format!("{}", n),
            Value::Text(s) => s.clone(),
        }
    }
}

/// The current value bound to a parameter. `value` is `None` until the
/// user first edits the input (and when a numeric field is cleared).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamValue {
    #[serde(rename = "parameterId")]
    pub param_id: ParamId,
    pub value: Option<Value>,
}
