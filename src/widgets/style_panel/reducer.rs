use iced::Task;

use super::event::StylePanelEvent;
use super::state::PanelState;

/// Reduce a style panel event into state updates.
pub(super) fn reduce(
    state: &mut PanelState,
    event: StylePanelEvent,
) -> Task<StylePanelEvent> {
    match event {
        StylePanelEvent::Toggle => {
            state.toggle();
            Task::none()
        },
        StylePanelEvent::OptionSelected { field, option } => {
            state.set_field(field, option);
            Task::none()
        },
        StylePanelEvent::Submit => {
            state.submit();
            state.close();
            log::debug!("style panel draft submitted");
            Task::none()
        },
        StylePanelEvent::Reset => {
            state.reset();
            log::debug!("style panel reset to defaults");
            Task::none()
        },
        StylePanelEvent::Dismiss => {
            // May arrive after the panel already closed; close() is
            // idempotent.
            state.close();
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use crate::widgets::style_panel::StylePanelEvent;
    use crate::widgets::style_panel::model::{
        DEFAULT_STYLE, FONT_SIZE_OPTIONS, StyleField,
    };
    use crate::widgets::style_panel::state::PanelState;

    fn open_state() -> PanelState {
        let mut state = PanelState::default();
        let _task = reduce(&mut state, StylePanelEvent::Toggle);
        state
    }

    #[test]
    fn given_closed_panel_when_toggled_then_draft_equals_committed() {
        let mut state = PanelState::default();

        let _task = reduce(&mut state, StylePanelEvent::Toggle);

        assert!(state.is_open());
        assert_eq!(state.draft(), state.baseline());
    }

    #[test]
    fn given_open_panel_when_size_changed_and_submitted_then_committed_and_closed()
    {
        let mut state = open_state();

        let _edit = reduce(
            &mut state,
            StylePanelEvent::OptionSelected {
                field: StyleField::FontSize,
                option: FONT_SIZE_OPTIONS[1],
            },
        );
        let _submit = reduce(&mut state, StylePanelEvent::Submit);

        assert!(!state.is_open());
        assert_eq!(state.baseline().font_size, FONT_SIZE_OPTIONS[1]);
        assert_eq!(state.baseline().font_family, DEFAULT_STYLE.font_family);
        assert_eq!(state.baseline().font_color, DEFAULT_STYLE.font_color);
        assert_eq!(
            state.baseline().background_color,
            DEFAULT_STYLE.background_color
        );
        assert_eq!(
            state.baseline().content_width,
            DEFAULT_STYLE.content_width
        );
    }

    #[test]
    fn given_modified_draft_when_dismissed_then_closed_and_baseline_unchanged()
    {
        let mut state = open_state();
        let baseline_before = *state.baseline();

        let _edit = reduce(
            &mut state,
            StylePanelEvent::OptionSelected {
                field: StyleField::FontSize,
                option: FONT_SIZE_OPTIONS[2],
            },
        );
        let _dismiss = reduce(&mut state, StylePanelEvent::Dismiss);

        assert!(!state.is_open());
        assert_eq!(state.baseline(), &baseline_before);
    }

    #[test]
    fn given_closed_panel_when_dismissed_then_nothing_changes() {
        let mut state = PanelState::default();
        let baseline_before = *state.baseline();

        let _task = reduce(&mut state, StylePanelEvent::Dismiss);

        assert!(!state.is_open());
        assert_eq!(state.baseline(), &baseline_before);
    }

    #[test]
    fn given_open_panel_when_reset_then_defaults_applied_and_still_open() {
        let mut state = open_state();
        let _edit = reduce(
            &mut state,
            StylePanelEvent::OptionSelected {
                field: StyleField::FontSize,
                option: FONT_SIZE_OPTIONS[2],
            },
        );

        let _reset = reduce(&mut state, StylePanelEvent::Reset);

        assert!(state.is_open());
        assert_eq!(state.draft(), &DEFAULT_STYLE);
        assert_eq!(state.baseline(), &DEFAULT_STYLE);
    }
}
