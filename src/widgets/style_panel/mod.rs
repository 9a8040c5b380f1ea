mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::StylePanelEvent;
use iced::Task;
use model::{StyleConfig, StylePanelViewModel};
use state::PanelState;

/// Style panel widget: a dismissible side panel editing article presentation
/// options with a draft/committed editing pattern. The draft lives here; the
/// app adopts the committed mirror after each reduce.
pub(crate) struct StylePanelWidget {
    state: PanelState,
}

impl StylePanelWidget {
    /// Create a panel whose draft is seeded from the committed style.
    pub(crate) fn new(committed: StyleConfig) -> Self {
        Self {
            state: PanelState::from_committed(committed),
        }
    }

    /// Reduce a UI event into state updates.
    pub(crate) fn reduce(
        &mut self,
        event: StylePanelEvent,
    ) -> Task<StylePanelEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> StylePanelViewModel<'_> {
        StylePanelViewModel {
            draft: self.state.draft(),
            is_open: self.state.is_open(),
            is_dirty: self.state.is_dirty(),
        }
    }

    /// Return the committed style mirror; it moves on submit and reset.
    pub(crate) fn committed(&self) -> &StyleConfig {
        self.state.baseline()
    }

    /// Return whether the panel is currently open.
    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }
}
