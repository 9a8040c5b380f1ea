use iced::widget::{button, container, text};
use iced::{Color, Element, Length, alignment};

/// UI events emitted by the arrow toggle button.
#[derive(Debug, Clone)]
pub(crate) enum ArrowButtonEvent {
    Pressed,
}

/// Props for rendering the panel toggle arrow.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArrowButtonProps {
    pub(crate) is_open: bool,
}

const ARROW_BUTTON_SIZE: f32 = 40.0;
const ARROW_GLYPH_SIZE: f32 = 16.0;

/// Render the round arrow button that toggles the style panel; the glyph
/// points away from the panel when closed and back toward it when open.
pub(crate) fn view<'a>(
    props: ArrowButtonProps,
) -> Element<'a, ArrowButtonEvent> {
    let glyph = if props.is_open { "\u{276E}" } else { "\u{276F}" };

    let label = container(text(glyph).size(ARROW_GLYPH_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(label)
        .on_press(ArrowButtonEvent::Pressed)
        .width(Length::Fixed(ARROW_BUTTON_SIZE))
        .height(Length::Fixed(ARROW_BUTTON_SIZE))
        .style(|_, status| {
            let background = if matches!(
                status,
                iced::widget::button::Status::Hovered
                    | iced::widget::button::Status::Pressed
            ) {
                Color::from_rgb8(0x3A, 0x3A, 0x42)
            } else {
                Color::from_rgb8(0x1E, 0x1E, 0x22)
            };

            iced::widget::button::Style {
                background: Some(background.into()),
                text_color: Color::from_rgb8(0xFF, 0xFF, 0xFF),
                border: iced::Border {
                    radius: (ARROW_BUTTON_SIZE / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
