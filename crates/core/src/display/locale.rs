//! Display locale presets.

use serde::{Deserialize, Serialize};

use crate::error::AmountError;

/// Separator presets for supported display locales.
///
/// A locale only drives the decimal and grouping separators; sign and
/// symbol placement are fixed by the amount templates. The default locale
/// is `it_IT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Italian (Italy): comma decimal, dot grouping.
    #[default]
    #[serde(rename = "it_IT")]
    ItIt,
    /// English (United States): dot decimal, comma grouping.
    #[serde(rename = "en_US")]
    EnUs,
    /// German (Germany): comma decimal, dot grouping.
    #[serde(rename = "de_DE")]
    DeDe,
    /// French (France): comma decimal, narrow no-break space grouping.
    #[serde(rename = "fr_FR")]
    FrFr,
}

impl Locale {
    /// Returns the decimal separator.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        match self {
            Self::ItIt | Self::DeDe | Self::FrFr => ',',
            Self::EnUs => '.',
        }
    }

    /// Returns the grouping separator (groups of three digits).
    #[must_use]
    pub const fn grouping_separator(&self) -> char {
        match self {
            Self::ItIt | Self::DeDe => '.',
            Self::EnUs => ',',
            Self::FrFr => '\u{202f}',
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ItIt => "it_IT",
            Self::EnUs => "en_US",
            Self::DeDe => "de_DE",
            Self::FrFr => "fr_FR",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Locale {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").to_lowercase().as_str() {
            "it_it" => Ok(Self::ItIt),
            "en_us" => Ok(Self::EnUs),
            "de_de" => Ok(Self::DeDe),
            "fr_fr" => Ok(Self::FrFr),
            _ => Err(AmountError::UnknownLocale(s.to_string())),
        }
    }
}
