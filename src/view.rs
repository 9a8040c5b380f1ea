use iced::widget::{Space, column, container, mouse_area, row, scrollable, text};
use iced::{Element, Length, Padding, Theme, alignment};

use super::App;
use crate::components::primitive::arrow_button;
use crate::events::AppEvent;
use crate::widgets::style_panel::view::panel_form;
use crate::widgets::style_panel::StylePanelEvent;

const ARTICLE_PADDING: f32 = 48.0;
const ARTICLE_SPACING: f32 = 24.0;
const TITLE_SCALE: f32 = 1.8;

const ARROW_MARGIN: f32 = 16.0;

const ARTICLE_TITLE: &str = "The Shape of a Page";
const ARTICLE_PARAGRAPHS: [&str; 3] = [
    "Long before screens, printers argued about measure: how wide a column \
     of text may run before the eye loses its way back to the next line. \
     The answer they settled on was not a number but a feel, somewhere \
     between forty-five and seventy-five characters, adjusted by typeface, \
     leading, and the patience of the reader.",
    "A page is a negotiation between the text and the person holding it. \
     Type that is too small asks too much; type that is too large wastes \
     the reader's attention on turning. Color works the same way: contrast \
     carries the words, but glare exhausts them. None of these choices are \
     universal, which is why they belong to the reader.",
    "Open the panel on the left and make the page yours. Every change is a \
     draft until you apply it; close the panel, press Escape, or click \
     anywhere on the article to put the draft away and keep reading as \
     before.",
];

/// Render the root application view: article surface, style panel overlay,
/// and the arrow toggle on top.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let vm = app.widgets.style_panel.vm();

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![view_article(app)];

    if vm.is_open {
        layers.push(view_panel_overlay(app));
    }

    layers.push(view_arrow_toggle(vm.is_open));

    iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the reading surface using the committed article style.
fn view_article(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let style = &app.article_style;

    let title = text(ARTICLE_TITLE)
        .size(style.text_size() * TITLE_SCALE)
        .font(style.font())
        .color(style.text_color());

    let mut body = column![title].spacing(ARTICLE_SPACING);
    for paragraph in ARTICLE_PARAGRAPHS {
        body = body.push(
            text(paragraph)
                .size(style.text_size())
                .font(style.font())
                .color(style.text_color()),
        );
    }

    let page = container(body.max_width(style.content_width()))
        .width(Length::Fill)
        .padding(ARTICLE_PADDING)
        .align_x(alignment::Horizontal::Center);

    let background = style.background();
    container(scrollable(page).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

/// Render the open panel beside a dismiss area covering the rest of the
/// viewport; a press anywhere outside the panel closes it.
fn view_panel_overlay(
    app: &App,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let panel = panel_form::view(panel_form::PanelFormProps {
        vm: app.widgets.style_panel.vm(),
    })
    .map(AppEvent::StylePanel);

    let dismiss_area = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(AppEvent::StylePanel(StylePanelEvent::Dismiss))
    .on_right_press(AppEvent::StylePanel(StylePanelEvent::Dismiss));

    row![panel, dismiss_area]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the arrow toggle pinned to the top-left corner, above the panel.
fn view_arrow_toggle<'a>(
    is_open: bool,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let arrow = arrow_button::view(arrow_button::ArrowButtonProps { is_open })
        .map(|event| match event {
            arrow_button::ArrowButtonEvent::Pressed => AppEvent::StylePanel(
                StylePanelEvent::Toggle,
            ),
        });

    container(arrow)
        .padding(Padding {
            top: ARROW_MARGIN,
            left: if is_open {
                panel_form::PANEL_WIDTH + ARROW_MARGIN
            } else {
                ARROW_MARGIN
            },
            ..Padding::ZERO
        })
        .into()
}
