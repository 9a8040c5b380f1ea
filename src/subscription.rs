use iced::Subscription;

use crate::app::App;
use crate::events::AppEvent;

/// Build the active subscription set from current app state.
///
/// The keyboard listener exists only while the style panel is open, so the
/// Escape dismissal handler attaches on open and detaches on close. iced
/// diffs the subscription set on every update, which guarantees a matching
/// detach on every path that closes the panel.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let mut subs = Vec::new();

    if app.widgets.style_panel.is_open() {
        subs.push(iced::keyboard::listen().map(AppEvent::Keyboard));
    }

    Subscription::batch(subs)
}
