pub mod model;
pub mod param;

pub use model::{Color, Model};
pub use param::{ParamId, ParamValue, Parameter, Value, ValueKind};

use serde::{Deserialize, Serialize};

/// Top-level editor state, owned by main.rs and passed to panes by
/// reference. Mutated only through dispatch; panes describe intent via
/// actions. Serialized wholesale by `get_model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub parameters: Vec<Parameter>,
    pub model: Model,
    /// Monotonic id allocator, starting at 0. Ids of removed parameters
    /// are never reused.
    #[serde(rename = "nextParamId", default)]
    pub next_param_id: ParamId,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            parameters: Vec::new(),
            model: Model::default(),
            next_param_id: 0,
        }
    }

    pub fn parameter(&self, id: ParamId) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.id == id)
    }

    pub fn value(&self, id: ParamId) -> Option<&ParamValue> {
        self.model.param_values.iter().find(|v| v.param_id == id)
    }

    /// Append a new parameter with a freshly allocated id.
    pub fn add_parameter(&mut self, name: &str, kind: ValueKind) -> ParamId {
        let id = self.next_param_id;
        self.next_param_id += 1;
        self.parameters.push(Parameter {
            id,
            name: name.to_string(),
            kind,
        });
        id
    }

    /// Overwrite the value bound to `id`, creating the binding on first
    /// edit. `None` records an explicitly absent value (cleared field).
    pub fn set_value(&mut self, id: ParamId, value: Option<Value>) {
        if let Some(existing) = self.model.param_values.iter_mut().find(|v| v.param_id == id) {
            existing.value = value;
        } else {
            self.model.param_values.push(ParamValue { param_id: id, value });
        }
    }

    /// Remove a parameter and any value bound to it. `colors` is not
    /// touched by removal.
    pub fn remove_parameter(&mut self, id: ParamId) {
        self.parameters.retain(|p| p.id != id);
        self.model.param_values.retain(|v| v.param_id != id);
    }

    /// Serialize the full state to JSON for external consumption.
    pub fn get_model(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_allocates_sequential_ids() {
        let mut state = EditorState::new();
        assert_eq!(state.add_parameter("Weight", ValueKind::Number), 0);
        assert_eq!(state.add_parameter("Label", ValueKind::Text), 1);
        assert_eq!(state.parameters.len(), 2);
        assert_eq!(state.parameters[0].name, "Weight");
        assert_eq!(state.parameters[1].kind, ValueKind::Text);
    }

    #[test]
    fn ids_stay_unique_after_remove_and_add() {
        let mut state = EditorState::new();
        for i in 0..4 {
            state.add_parameter(&format!("p{}", i), ValueKind::Text);
        }
        state.remove_parameter(1);
        state.remove_parameter(2);
        state.add_parameter("p4", ValueKind::Number);
        state.add_parameter("p5", ValueKind::Number);

        let mut ids: Vec<_> = state.parameters.iter().map(|p| p.id).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len, "duplicate parameter id after remove/add");
    }

    #[test]
    fn set_value_creates_then_overwrites() {
        let mut state = EditorState::new();
        let id = state.add_parameter("Weight", ValueKind::Number);
        assert!(state.value(id).is_none());

        state.set_value(id, Some(Value::Number(1.0)));
        state.set_value(id, Some(Value::Number(12.5)));

        let matching: Vec<_> = state
            .model
            .param_values
            .iter()
            .filter(|v| v.param_id == id)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].value, Some(Value::Number(12.5)));
    }

    #[test]
    fn set_value_absent() {
        let mut state = EditorState::new();
        let id = state.add_parameter("Weight", ValueKind::Number);
        state.set_value(id, Some(Value::Number(2.0)));
        state.set_value(id, None);
        assert_eq!(state.value(id).unwrap().value, None);
    }

    #[test]
    fn remove_drops_parameter_and_value_but_not_colors() {
        let mut state = EditorState::new();
        let keep = state.add_parameter("keep", ValueKind::Text);
        let gone = state.add_parameter("gone", ValueKind::Number);
        state.set_value(keep, Some(Value::Text("x".into())));
        state.set_value(gone, Some(Value::Number(7.0)));
        state.model.colors.push(Color { color_id: 0, value: "#fff".into() });

        state.remove_parameter(gone);

        assert!(state.parameters.iter().all(|p| p.id != gone));
        assert!(state.model.param_values.iter().all(|v| v.param_id != gone));
        assert_eq!(state.parameters.len(), 1);
        assert_eq!(state.model.param_values.len(), 1);
        assert_eq!(state.model.colors.len(), 1);
    }

    #[test]
    fn get_model_round_trips() {
        let mut state = EditorState::new();
        let a = state.add_parameter("Weight", ValueKind::Number);
        let b = state.add_parameter("Label", ValueKind::Text);
        state.set_value(a, Some(Value::Number(12.5)));
        state.set_value(b, Some(Value::Text("heavy".into())));
        state.add_parameter("untouched", ValueKind::Text);
        state.remove_parameter(b);

        let json = state.get_model().unwrap();
        let parsed: EditorState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn get_model_field_order_and_names() {
        let mut state = EditorState::new();
        let id = state.add_parameter("Weight", ValueKind::Number);
        state.set_value(id, Some(Value::Number(12.5)));

        let json = state.get_model().unwrap();
        assert_eq!(
            json,
            r#"{"parameters":[{"id":0,"name":"Weight","type":"number"}],"model":{"parameterValues":[{"parameterId":0,"value":12.5}],"colors":[]},"nextParamId":1}"#
        );
    }
}
