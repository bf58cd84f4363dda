//! Classification of engine change notifications.
//!
//! The engine calls back on every attribute mutation anywhere in its object
//! graph. Hover tracking fires on each mouse move, so it is dropped before it
//! reaches the UI.

#[cfg(test)]
#[path = "change_test.rs"]
mod change_test;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The hovered object changed. Never refreshes the view.
    Hover,
    /// The selected object changed (possibly to nothing).
    Selection,
    /// Any other attribute, carried for logging.
    Other(String),
}

impl Change {
    #[must_use]
    pub fn classify(attr: &str) -> Self {
        match attr {
            "hovered" => Self::Hover,
            "selection" => Self::Selection,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Whether the UI should re-read engine state.
    #[must_use]
    pub fn refreshes(&self) -> bool {
        !matches!(self, Self::Hover)
    }
}
