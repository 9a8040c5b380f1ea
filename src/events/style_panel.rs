use iced::Task;

use super::AppEvent;
use crate::app::App;
use crate::widgets::style_panel::StylePanelEvent;

/// Route a style panel event through the widget reducer, then adopt the
/// widget's committed mirror in the same update turn so submit and reset
/// never render a frame with a stale article style.
pub(crate) fn handle(app: &mut App, event: StylePanelEvent) -> Task<AppEvent> {
    let task = app
        .widgets
        .style_panel
        .reduce(event)
        .map(AppEvent::StylePanel);

    let committed = *app.widgets.style_panel.committed();
    if app.article_style != committed {
        app.article_style = committed;
        log::info!("article style committed");
    }

    task
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::app::App;
    use crate::widgets::style_panel::StylePanelEvent;
    use crate::widgets::style_panel::model::{
        DEFAULT_STYLE, FONT_SIZE_OPTIONS, StyleField,
    };

    #[test]
    fn given_toggle_event_when_handled_then_panel_opens() {
        let (mut app, _task) = App::new();
        assert!(!app.widgets.style_panel.is_open());

        let _task = handle(&mut app, StylePanelEvent::Toggle);

        assert!(app.widgets.style_panel.is_open());
    }

    #[test]
    fn given_edited_draft_when_submitted_then_style_adopted_and_panel_closed()
    {
        let (mut app, _task) = App::new();
        let _open = handle(&mut app, StylePanelEvent::Toggle);
        let _edit = handle(
            &mut app,
            StylePanelEvent::OptionSelected {
                field: StyleField::FontSize,
                option: FONT_SIZE_OPTIONS[1],
            },
        );
        assert_eq!(app.article_style, DEFAULT_STYLE);

        let _task = handle(&mut app, StylePanelEvent::Submit);

        assert!(!app.widgets.style_panel.is_open());
        assert_eq!(app.article_style.font_size, FONT_SIZE_OPTIONS[1]);
        assert_eq!(app.article_style.font_family, DEFAULT_STYLE.font_family);
    }

    #[test]
    fn given_dismiss_event_when_panel_open_then_committed_style_unchanged() {
        let (mut app, _task) = App::new();
        let committed_before = app.article_style;
        let _open = handle(&mut app, StylePanelEvent::Toggle);
        let _edit = handle(
            &mut app,
            StylePanelEvent::OptionSelected {
                field: StyleField::FontSize,
                option: FONT_SIZE_OPTIONS[1],
            },
        );

        let _task = handle(&mut app, StylePanelEvent::Dismiss);

        assert!(!app.widgets.style_panel.is_open());
        assert_eq!(app.article_style, committed_before);
    }

    #[test]
    fn given_modified_committed_style_when_reset_then_defaults_adopted_and_panel_stays_open()
    {
        let (mut app, _task) = App::new();
        let _open = handle(&mut app, StylePanelEvent::Toggle);
        let _edit = handle(
            &mut app,
            StylePanelEvent::OptionSelected {
                field: StyleField::FontSize,
                option: FONT_SIZE_OPTIONS[2],
            },
        );
        let _submit = handle(&mut app, StylePanelEvent::Submit);
        let _reopen = handle(&mut app, StylePanelEvent::Toggle);
        assert_ne!(app.article_style, DEFAULT_STYLE);

        let _task = handle(&mut app, StylePanelEvent::Reset);

        assert!(app.widgets.style_panel.is_open());
        assert_eq!(app.article_style, DEFAULT_STYLE);
        assert_eq!(app.widgets.style_panel.vm().draft, &DEFAULT_STYLE);
    }
}
