use iced::Task;

use super::App;
use crate::events::{self, AppEvent};

/// Thin dispatch: route each event to its owning handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    events::handle(app, event)
}
