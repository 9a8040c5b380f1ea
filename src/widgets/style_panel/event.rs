use super::model::{StyleField, StyleOption};

/// UI events handled by the style panel.
#[derive(Debug, Clone)]
pub(crate) enum StylePanelEvent {
    /// The arrow affordance was pressed.
    Toggle,
    /// A picker chose an option for one draft field.
    OptionSelected {
        field: StyleField,
        option: StyleOption,
    },
    /// The apply button was pressed.
    Submit,
    /// The reset button was pressed.
    Reset,
    /// Escape was pressed or a press landed outside the panel.
    Dismiss,
}
