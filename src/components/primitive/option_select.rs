use iced::widget::{column, pick_list, text};
use iced::{Element, Length};

use crate::widgets::style_panel::model::StyleOption;

/// UI events emitted by a select picker.
#[derive(Debug, Clone)]
pub(crate) enum OptionSelectEvent {
    Selected(StyleOption),
}

/// Props for rendering a titled dropdown over one option catalog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OptionSelectProps {
    pub(crate) title: &'static str,
    pub(crate) options: &'static [StyleOption],
    pub(crate) selected: StyleOption,
}

const TITLE_SIZE: f32 = 12.0;
const OPTION_TEXT_SIZE: f32 = 14.0;
const ROW_SPACING: f32 = 6.0;

/// Render a titled dropdown over a fixed option catalog.
pub(crate) fn view<'a>(
    props: OptionSelectProps,
) -> Element<'a, OptionSelectEvent> {
    let selector = pick_list(
        props.options,
        Some(props.selected),
        OptionSelectEvent::Selected,
    )
    .text_size(OPTION_TEXT_SIZE)
    .width(Length::Fill);

    column![text(props.title).size(TITLE_SIZE), selector]
        .spacing(ROW_SPACING)
        .width(Length::Fill)
        .into()
}
