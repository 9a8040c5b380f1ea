#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::events::AppEvent;
use crate::widgets::Widgets;
use crate::widgets::style_panel::StylePanelWidget;
use crate::widgets::style_panel::model::{DEFAULT_STYLE, StyleConfig};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Root application state.
pub(crate) struct App {
    /// The committed article style used to render the reading surface.
    pub(crate) article_style: StyleConfig,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let article_style = DEFAULT_STYLE;
        let widgets = Widgets {
            style_panel: StylePanelWidget::new(article_style),
        };

        let app = App {
            article_style,
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Typecase")
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
