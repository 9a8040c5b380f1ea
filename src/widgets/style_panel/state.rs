use super::model::{DEFAULT_STYLE, StyleConfig, StyleField, StyleOption};

/// Visibility flag plus the draft/baseline style pair for the panel.
///
/// `baseline` mirrors the committed style owned by the app; it seeds the
/// draft on open and is the comparison target for dirty tracking.
#[derive(Debug)]
pub(super) struct PanelState {
    baseline: StyleConfig,
    draft: StyleConfig,
    open: bool,
}

impl PanelState {
    /// Create closed panel state seeded from the committed style.
    pub(super) fn from_committed(committed: StyleConfig) -> Self {
        Self {
            baseline: committed,
            draft: committed,
            open: false,
        }
    }

    /// Return the editable style draft.
    pub(super) fn draft(&self) -> &StyleConfig {
        &self.draft
    }

    /// Return the committed-style mirror used as the dirty baseline.
    pub(super) fn baseline(&self) -> &StyleConfig {
        &self.baseline
    }

    /// Return whether the panel is open.
    pub(super) fn is_open(&self) -> bool {
        self.open
    }

    /// Return whether the draft differs from the baseline.
    pub(super) fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    /// Flip visibility; opening re-seeds the draft from the baseline so a
    /// previously dismissed draft never reappears.
    pub(super) fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.draft = self.baseline;
        }
    }

    /// Idempotently force the panel closed.
    pub(super) fn close(&mut self) {
        self.open = false;
    }

    /// Replace exactly one draft field.
    pub(super) fn set_field(&mut self, field: StyleField, option: StyleOption) {
        self.draft.set(field, option);
    }

    /// Promote the draft to the new baseline and return it for committing.
    pub(super) fn submit(&mut self) -> StyleConfig {
        self.baseline = self.draft;
        self.draft
    }

    /// Force draft and baseline to the default configuration and return it.
    pub(super) fn reset(&mut self) -> StyleConfig {
        self.baseline = DEFAULT_STYLE;
        self.draft = DEFAULT_STYLE;
        DEFAULT_STYLE
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::from_committed(DEFAULT_STYLE)
    }
}

#[cfg(test)]
mod tests {
    use super::PanelState;
    use crate::widgets::style_panel::model::{
        CONTENT_WIDTH_OPTIONS, DEFAULT_STYLE, FONT_SIZE_OPTIONS, StyleField,
    };

    #[test]
    fn given_closed_panel_when_toggled_twice_then_closed_again() {
        let mut state = PanelState::default();

        state.toggle();
        assert!(state.is_open());

        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn given_closed_panel_when_close_called_then_stays_closed() {
        let mut state = PanelState::default();

        state.close();
        state.close();

        assert!(!state.is_open());
    }

    #[test]
    fn given_edited_draft_when_reopened_then_draft_reseeded_from_baseline() {
        let mut state = PanelState::default();
        state.toggle();
        state.set_field(StyleField::FontSize, FONT_SIZE_OPTIONS[2]);
        assert!(state.is_dirty());

        state.close();
        state.toggle();

        assert!(!state.is_dirty());
        assert_eq!(state.draft(), state.baseline());
    }

    #[test]
    fn given_set_field_when_called_then_only_named_field_changes() {
        let mut state = PanelState::default();

        state.set_field(StyleField::ContentWidth, CONTENT_WIDTH_OPTIONS[1]);

        assert_eq!(state.draft().content_width, CONTENT_WIDTH_OPTIONS[1]);
        assert_eq!(state.draft().font_family, DEFAULT_STYLE.font_family);
        assert_eq!(state.draft().font_size, DEFAULT_STYLE.font_size);
        assert_eq!(state.draft().font_color, DEFAULT_STYLE.font_color);
        assert_eq!(
            state.draft().background_color,
            DEFAULT_STYLE.background_color
        );
    }

    #[test]
    fn given_edited_draft_when_submitted_then_baseline_matches_draft() {
        let mut state = PanelState::default();
        state.set_field(StyleField::FontSize, FONT_SIZE_OPTIONS[1]);

        let committed = state.submit();

        assert_eq!(&committed, state.draft());
        assert_eq!(state.baseline(), state.draft());
        assert!(!state.is_dirty());
    }

    #[test]
    fn given_any_draft_when_reset_then_both_copies_are_defaults() {
        let mut state = PanelState::default();
        state.set_field(StyleField::FontSize, FONT_SIZE_OPTIONS[2]);
        state.set_field(StyleField::ContentWidth, CONTENT_WIDTH_OPTIONS[2]);

        let committed = state.reset();

        assert_eq!(committed, DEFAULT_STYLE);
        assert_eq!(state.draft(), &DEFAULT_STYLE);
        assert_eq!(state.baseline(), &DEFAULT_STYLE);
    }
}
