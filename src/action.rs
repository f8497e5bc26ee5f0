use crate::state::{ParamId, Value, ValueKind};

/// Parameter actions
#[derive(Debug, Clone, PartialEq)]
pub enum ParamAction {
    Add { name: String, kind: ValueKind },
    SetValue(ParamId, Option<Value>),
    Remove(ParamId),
}

/// Session-level actions
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    ExportModel,
}

/// Navigation actions (modal stack)
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    PushPane(&'static str),
    PopPane,
}

/// Actions returned from pane input handling
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Nav(NavAction),
    Param(ParamAction),
    Session(SessionAction),
}

/// Navigation intent returned from dispatch — processed by the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum NavIntent {
    PushTo(&'static str),
    Pop,
}

/// Result of dispatching an action — side effects for the UI layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchResult {
    pub quit: bool,
    pub nav: Vec<NavIntent>,
    /// Messages for the status footer
    pub status: Vec<String>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_quit() -> Self {
        Self { quit: true, ..Self::default() }
    }

    pub fn with_nav(intent: NavIntent) -> Self {
        Self { nav: vec![intent], ..Self::default() }
    }

    pub fn with_status(message: impl Into<String>) -> Self {
        Self { status: vec![message.into()], ..Self::default() }
    }
}
