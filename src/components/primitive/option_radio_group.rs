use iced::widget::{Row, column, radio, text};
use iced::{Element, Length};

use crate::widgets::style_panel::model::StyleOption;

/// UI events emitted by a radio-group picker.
#[derive(Debug, Clone)]
pub(crate) enum OptionRadioGroupEvent {
    Selected(StyleOption),
}

/// Props for rendering a titled radio group over one option catalog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OptionRadioGroupProps {
    pub(crate) title: &'static str,
    pub(crate) options: &'static [StyleOption],
    pub(crate) selected: StyleOption,
}

const TITLE_SIZE: f32 = 12.0;
const OPTION_TEXT_SIZE: f32 = 14.0;
const RADIO_SIZE: f32 = 16.0;
const ROW_SPACING: f32 = 6.0;
const CHOICE_SPACING: f32 = 14.0;

/// Render a titled row of radio choices over a fixed option catalog.
pub(crate) fn view<'a>(
    props: OptionRadioGroupProps,
) -> Element<'a, OptionRadioGroupEvent> {
    let choices = props.options.iter().fold(
        Row::new().spacing(CHOICE_SPACING),
        |choices, &option| {
            choices.push(
                radio(
                    option.label,
                    option,
                    Some(props.selected),
                    OptionRadioGroupEvent::Selected,
                )
                .size(RADIO_SIZE)
                .text_size(OPTION_TEXT_SIZE),
            )
        },
    );

    column![text(props.title).size(TITLE_SIZE), choices]
        .spacing(ROW_SPACING)
        .width(Length::Fill)
        .into()
}
