pub(crate) mod style_panel;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) style_panel: style_panel::StylePanelWidget,
}
