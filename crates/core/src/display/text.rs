//! Styled text spans for differentiated amount rendering.
//!
//! The display text splits at the decimal separator into a bold integer
//! piece and a thinner fraction piece (separator included), mirroring how
//! price labels emphasize whole units. Missing or unformattable amounts
//! degrade to a single unstyled span.

use serde::{Deserialize, Serialize};

use super::locale::Locale;
use super::MISSING_AMOUNT_TEXT;
use crate::amount::Amount;

/// Font weight of a rendered span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular system weight.
    #[default]
    Regular,
    /// Bold weight, used for the integer piece.
    Bold,
    /// Thin weight, used for the fraction piece.
    Thin,
}

/// RGB text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColor {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl TextColor {
    /// Black, the default label color.
    pub const BLACK: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
    };
}

impl Default for TextColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Text attributes applied to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Point size.
    pub size: u32,
    /// Font weight.
    pub weight: FontWeight,
    /// Foreground color.
    pub color: TextColor,
}

/// A run of text with optional styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content.
    pub text: String,
    /// Styling, or `None` for plain text.
    pub style: Option<TextStyle>,
}

/// Rich text assembled from ordered spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    /// Ordered spans.
    pub spans: Vec<TextSpan>,
}

impl StyledText {
    /// Wraps text in a single unstyled span.
    #[must_use]
    pub fn plain(text: String) -> Self {
        Self {
            spans: vec![TextSpan { text, style: None }],
        }
    }

    /// Returns the concatenated text of all spans.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Splits at the separator only when it occurs exactly once; the second
/// piece keeps the separator.
fn split_at_single_separator(text: &str, separator: char) -> Option<(String, String)> {
    let mut occurrences = text.match_indices(separator);
    let (index, _) = occurrences.next()?;
    if occurrences.next().is_some() {
        return None;
    }
    Some((text[..index].to_string(), text[index..].to_string()))
}

impl Amount {
    /// Splits the display text into a bold integer span and a thin fraction
    /// span, both in the given color.
    ///
    /// Returns `None` when the display text does not contain exactly one
    /// decimal separator (the invalid-amount fallback has none).
    #[must_use]
    pub fn styled_text(
        &self,
        integer_size: u32,
        fraction_size: u32,
        color: TextColor,
    ) -> Option<StyledText> {
        self.styled_text_in(Locale::default(), integer_size, fraction_size, color)
    }

    /// Locale-aware variant of [`Amount::styled_text`].
    #[must_use]
    pub fn styled_text_in(
        &self,
        locale: Locale,
        integer_size: u32,
        fraction_size: u32,
        color: TextColor,
    ) -> Option<StyledText> {
        let text = self.display_in(locale);
        let (integer_piece, fraction_piece) =
            split_at_single_separator(&text, locale.decimal_separator())?;
        Some(StyledText {
            spans: vec![
                TextSpan {
                    text: integer_piece,
                    style: Some(TextStyle {
                        size: integer_size,
                        weight: FontWeight::Bold,
                        color,
                    }),
                },
                TextSpan {
                    text: fraction_piece,
                    style: Some(TextStyle {
                        size: fraction_size,
                        weight: FontWeight::Thin,
                        color,
                    }),
                },
            ],
        })
    }

    /// Single-size convenience: the fraction span renders one point smaller
    /// than the integer span.
    #[must_use]
    pub fn styled_text_uniform(&self, size: u32, color: TextColor) -> Option<StyledText> {
        self.styled_text(size, size.saturating_sub(1), color)
    }
}

/// Formats an optional amount, or the missing-information text.
#[must_use]
pub fn describe(amount: Option<&Amount>) -> String {
    describe_in(amount, Locale::default())
}

/// Locale-aware variant of [`describe`].
#[must_use]
pub fn describe_in(amount: Option<&Amount>, locale: Locale) -> String {
    match amount {
        Some(amount) => amount.display_in(locale),
        None => MISSING_AMOUNT_TEXT.to_string(),
    }
}

/// Styled rendering of an optional amount.
///
/// A missing amount yields a single unstyled span of the missing-information
/// text; a present amount whose display text cannot be split degrades to a
/// single unstyled span of that text.
#[must_use]
pub fn styled(
    amount: Option<&Amount>,
    integer_size: u32,
    fraction_size: u32,
    color: TextColor,
) -> StyledText {
    styled_in(amount, Locale::default(), integer_size, fraction_size, color)
}

/// Locale-aware variant of [`styled`].
#[must_use]
pub fn styled_in(
    amount: Option<&Amount>,
    locale: Locale,
    integer_size: u32,
    fraction_size: u32,
    color: TextColor,
) -> StyledText {
    match amount {
        Some(amount) => amount
            .styled_text_in(locale, integer_size, fraction_size, color)
            .unwrap_or_else(|| StyledText::plain(amount.display_in(locale))),
        None => StyledText::plain(MISSING_AMOUNT_TEXT.to_string()),
    }
}

/// Single-size variant of [`styled`]; see [`Amount::styled_text_uniform`].
#[must_use]
pub fn styled_uniform(amount: Option<&Amount>, size: u32, color: TextColor) -> StyledText {
    styled(amount, size, size.saturating_sub(1), color)
}
