use iced::{Color, Font};

/// Underlying value carried by a catalog option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OptionValue {
    /// A font family name resolvable by the text shaper.
    FontFamily(&'static str),
    /// A pixel dimension (font size or content width).
    Px(u16),
    /// An sRGB color.
    Rgb(u8, u8, u8),
}

/// One selectable entry from a field's fixed option catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StyleOption {
    pub(crate) label: &'static str,
    pub(crate) value: OptionValue,
}

impl std::fmt::Display for StyleOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

/// The five independently settable presentation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StyleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

/// A complete article presentation configuration.
///
/// Plain value record: copies never alias, so the panel draft and the
/// committed style cannot observe each other's mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StyleConfig {
    pub(crate) font_family: StyleOption,
    pub(crate) font_size: StyleOption,
    pub(crate) font_color: StyleOption,
    pub(crate) background_color: StyleOption,
    pub(crate) content_width: StyleOption,
}

impl StyleConfig {
    /// Replace exactly one named field, leaving the others untouched.
    pub(crate) fn set(&mut self, field: StyleField, option: StyleOption) {
        match field {
            StyleField::FontFamily => self.font_family = option,
            StyleField::FontSize => self.font_size = option,
            StyleField::FontColor => self.font_color = option,
            StyleField::BackgroundColor => self.background_color = option,
            StyleField::ContentWidth => self.content_width = option,
        }
    }

    /// Return the option currently held by the named field.
    #[cfg(test)]
    pub(crate) fn get(&self, field: StyleField) -> StyleOption {
        match field {
            StyleField::FontFamily => self.font_family,
            StyleField::FontSize => self.font_size,
            StyleField::FontColor => self.font_color,
            StyleField::BackgroundColor => self.background_color,
            StyleField::ContentWidth => self.content_width,
        }
    }

    /// Font used for article text.
    pub(crate) fn font(&self) -> Font {
        match self.font_family.value {
            OptionValue::FontFamily(name) => Font::with_name(name),
            _ => Font::with_name(DEFAULT_FONT_NAME),
        }
    }

    /// Article body text size in pixels.
    pub(crate) fn text_size(&self) -> f32 {
        px_or(self.font_size.value, DEFAULT_TEXT_SIZE)
    }

    /// Article text color.
    pub(crate) fn text_color(&self) -> Color {
        rgb_or(self.font_color.value, Color::BLACK)
    }

    /// Page background color.
    pub(crate) fn background(&self) -> Color {
        rgb_or(self.background_color.value, Color::WHITE)
    }

    /// Article column width in pixels.
    pub(crate) fn content_width(&self) -> f32 {
        px_or(self.content_width.value, DEFAULT_CONTENT_WIDTH)
    }
}

fn px_or(value: OptionValue, fallback: f32) -> f32 {
    match value {
        OptionValue::Px(px) => f32::from(px),
        _ => fallback,
    }
}

fn rgb_or(value: OptionValue, fallback: Color) -> Color {
    match value {
        OptionValue::Rgb(r, g, b) => Color::from_rgb8(r, g, b),
        _ => fallback,
    }
}

const fn opt(label: &'static str, value: OptionValue) -> StyleOption {
    StyleOption { label, value }
}

const DEFAULT_FONT_NAME: &str = "Open Sans";
const DEFAULT_TEXT_SIZE: f32 = 18.0;
const DEFAULT_CONTENT_WIDTH: f32 = 1100.0;

pub(crate) const FONT_FAMILY_OPTIONS: [StyleOption; 5] = [
    opt("Open Sans", OptionValue::FontFamily("Open Sans")),
    opt("Ubuntu", OptionValue::FontFamily("Ubuntu")),
    opt("Cormorant Garamond", OptionValue::FontFamily("Cormorant Garamond")),
    opt("Days One", OptionValue::FontFamily("Days One")),
    opt("Fira Code", OptionValue::FontFamily("Fira Code")),
];

pub(crate) const FONT_SIZE_OPTIONS: [StyleOption; 3] = [
    opt("18px", OptionValue::Px(18)),
    opt("25px", OptionValue::Px(25)),
    opt("38px", OptionValue::Px(38)),
];

pub(crate) const FONT_COLOR_OPTIONS: [StyleOption; 6] = [
    opt("Black", OptionValue::Rgb(0x00, 0x00, 0x00)),
    opt("White", OptionValue::Rgb(0xFF, 0xFF, 0xFF)),
    opt("Gray", OptionValue::Rgb(0x54, 0x57, 0x5A)),
    opt("Coral", OptionValue::Rgb(0xFF, 0x75, 0x52)),
    opt("Teal", OptionValue::Rgb(0x22, 0x86, 0x75)),
    opt("Violet", OptionValue::Rgb(0x7A, 0x5C, 0xC7)),
];

pub(crate) const BACKGROUND_COLOR_OPTIONS: [StyleOption; 6] = [
    opt("White", OptionValue::Rgb(0xFF, 0xFF, 0xFF)),
    opt("Paper", OptionValue::Rgb(0xFA, 0xF5, 0xEB)),
    opt("Mint", OptionValue::Rgb(0xD6, 0xF0, 0xE7)),
    opt("Lavender", OptionValue::Rgb(0xE6, 0xE2, 0xF6)),
    opt("Charcoal", OptionValue::Rgb(0x22, 0x22, 0x26)),
    opt("Black", OptionValue::Rgb(0x00, 0x00, 0x00)),
];

pub(crate) const CONTENT_WIDTH_OPTIONS: [StyleOption; 3] = [
    opt("Wide", OptionValue::Px(1550)),
    opt("Standard", OptionValue::Px(950)),
    opt("Narrow", OptionValue::Px(650)),
];

/// The fixed reset target for both the draft and the committed style.
pub(crate) const DEFAULT_STYLE: StyleConfig = StyleConfig {
    font_family: FONT_FAMILY_OPTIONS[0],
    font_size: FONT_SIZE_OPTIONS[0],
    font_color: FONT_COLOR_OPTIONS[0],
    background_color: BACKGROUND_COLOR_OPTIONS[0],
    content_width: CONTENT_WIDTH_OPTIONS[0],
};

/// Read-only snapshot handed to the panel form view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StylePanelViewModel<'a> {
    pub(crate) draft: &'a StyleConfig,
    pub(crate) is_open: bool,
    pub(crate) is_dirty: bool,
}
