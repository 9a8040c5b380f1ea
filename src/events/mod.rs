use iced::Task;

use crate::app::App;
use crate::widgets::style_panel::StylePanelEvent;

pub(crate) mod style_panel;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Style panel widget
    StylePanel(StylePanelEvent),
    // Keyboard input, subscribed only while the panel is open
    Keyboard(iced::keyboard::Event),
}

pub(crate) fn handle(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::StylePanel(event) => style_panel::handle(app, event),
        AppEvent::Keyboard(event) => handle_keyboard(app, event),
    }
}

fn handle_keyboard(
    app: &mut App,
    event: iced::keyboard::Event,
) -> Task<AppEvent> {
    if let iced::keyboard::Event::KeyPressed { key, .. } = event {
        if matches!(
            key,
            iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape)
        ) {
            return style_panel::handle(app, StylePanelEvent::Dismiss);
        }
    }

    Task::none()
}
