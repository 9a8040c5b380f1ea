use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Color, Element, Length, Theme, alignment};

use crate::components::primitive::{option_radio_group, option_select};
use crate::widgets::style_panel::event::StylePanelEvent;
use crate::widgets::style_panel::model::{
    BACKGROUND_COLOR_OPTIONS, CONTENT_WIDTH_OPTIONS, FONT_COLOR_OPTIONS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS, StyleField, StylePanelViewModel,
};

pub(crate) const PANEL_WIDTH: f32 = 320.0;

const PANEL_PADDING: f32 = 24.0;
const FIELD_SPACING: f32 = 20.0;
const HEADING_SIZE: f32 = 20.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

const ACTION_SPACING: f32 = 12.0;
const ACTION_HEIGHT: f32 = 34.0;
const ACTION_FONT_SIZE: f32 = 14.0;

/// Props for the style panel form view.
pub(crate) struct PanelFormProps<'a> {
    pub(crate) vm: StylePanelViewModel<'a>,
}

/// Render the open style panel: heading, pickers, apply/reset actions.
pub(crate) fn view(
    props: PanelFormProps<'_>,
) -> Element<'_, StylePanelEvent, Theme, iced::Renderer> {
    let draft = props.vm.draft;

    let heading = text("Style settings")
        .size(HEADING_SIZE)
        .color(heading_color());

    let font_family = option_select::view(option_select::OptionSelectProps {
        title: "Font",
        options: &FONT_FAMILY_OPTIONS,
        selected: draft.font_family,
    })
    .map(|event| select_change(StyleField::FontFamily, event));

    let font_size =
        option_radio_group::view(option_radio_group::OptionRadioGroupProps {
            title: "Font size",
            options: &FONT_SIZE_OPTIONS,
            selected: draft.font_size,
        })
        .map(|event| radio_change(StyleField::FontSize, event));

    let font_color = option_select::view(option_select::OptionSelectProps {
        title: "Font color",
        options: &FONT_COLOR_OPTIONS,
        selected: draft.font_color,
    })
    .map(|event| select_change(StyleField::FontColor, event));

    let background_color =
        option_select::view(option_select::OptionSelectProps {
            title: "Background color",
            options: &BACKGROUND_COLOR_OPTIONS,
            selected: draft.background_color,
        })
        .map(|event| select_change(StyleField::BackgroundColor, event));

    let content_width = option_select::view(option_select::OptionSelectProps {
        title: "Content width",
        options: &CONTENT_WIDTH_OPTIONS,
        selected: draft.content_width,
    })
    .map(|event| select_change(StyleField::ContentWidth, event));

    let fields = column![
        heading,
        font_family,
        font_size,
        font_color,
        separator(),
        background_color,
        content_width,
    ]
    .spacing(FIELD_SPACING)
    .width(Length::Fill);

    let reset_button = action_button(
        "Reset",
        true,
        StylePanelEvent::Reset,
    );
    let apply_button = action_button(
        "Apply",
        props.vm.is_dirty,
        StylePanelEvent::Submit,
    );

    let actions = row![reset_button, apply_button]
        .spacing(ACTION_SPACING)
        .width(Length::Fill);

    let body = column![scrollable(fields).height(Length::Fill), actions]
        .spacing(FIELD_SPACING)
        .width(Length::Fill)
        .height(Length::Fill);

    container(body)
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .padding(PANEL_PADDING)
        .style(|_| iced::widget::container::Style {
            background: Some(panel_background().into()),
            text_color: Some(heading_color()),
            ..Default::default()
        })
        .into()
}

fn select_change(
    field: StyleField,
    event: option_select::OptionSelectEvent,
) -> StylePanelEvent {
    match event {
        option_select::OptionSelectEvent::Selected(option) => {
            StylePanelEvent::OptionSelected { field, option }
        },
    }
}

fn radio_change(
    field: StyleField,
    event: option_radio_group::OptionRadioGroupEvent,
) -> StylePanelEvent {
    match event {
        option_radio_group::OptionRadioGroupEvent::Selected(option) => {
            StylePanelEvent::OptionSelected { field, option }
        },
    }
}

fn separator<'a>() -> Element<'a, StylePanelEvent, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(|_| iced::widget::container::Style {
            background: Some(separator_color().into()),
            ..Default::default()
        })
        .into()
}

fn action_button<'a>(
    label: &'a str,
    enabled: bool,
    on_press: StylePanelEvent,
) -> Element<'a, StylePanelEvent, Theme, iced::Renderer> {
    let content = container(text(label).size(ACTION_FONT_SIZE))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut button = button(content)
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_HEIGHT))
        .style(move |_, status| action_button_style(enabled, status));

    if enabled {
        button = button.on_press(on_press);
    }

    button.into()
}

fn action_button_style(
    enabled: bool,
    status: ButtonStatus,
) -> iced::widget::button::Style {
    let background = if !enabled {
        disabled_action_color()
    } else if matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed) {
        hovered_action_color()
    } else {
        action_color()
    };

    iced::widget::button::Style {
        background: Some(background.into()),
        text_color: action_text_color(),
        border: iced::Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn panel_background() -> Color {
    Color::from_rgb8(0xF1, 0xF0, 0xEC)
}

fn heading_color() -> Color {
    Color::from_rgb8(0x1E, 0x1E, 0x22)
}

fn separator_color() -> Color {
    Color::from_rgb8(0xD0, 0xCE, 0xC8)
}

fn action_color() -> Color {
    Color::from_rgb8(0x1E, 0x1E, 0x22)
}

fn hovered_action_color() -> Color {
    Color::from_rgb8(0x3A, 0x3A, 0x42)
}

fn disabled_action_color() -> Color {
    Color::from_rgb8(0xB9, 0xB7, 0xB2)
}

fn action_text_color() -> Color {
    Color::from_rgb8(0xFF, 0xFF, 0xFF)
}
