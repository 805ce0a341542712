//! Theme registry: maps a visual theme to the two-color palette used
//! for image attachments.
//!
//! The palette is looked up here once and passed down explicitly; the
//! quantizer never reads theme state on its own.

use std::fmt;
use std::str::FromStr;

use duotone_dither::{DuotonePalette, Rgb};

/// A visual theme.
///
/// The two playful themes carry their own attachment palettes; the
/// corpo themes fall back to plain black/white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    PlayfulLight,
    PlayfulDark,
    #[default]
    CorpoLight,
    CorpoDark,
}

impl Theme {
    /// The identifier used in config files and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::PlayfulLight => "playful-light",
            Theme::PlayfulDark => "playful-dark",
            Theme::CorpoLight => "corpo-light",
            Theme::CorpoDark => "corpo-dark",
        }
    }

    /// The attachment palette for this theme.
    ///
    /// Themes without a specific palette use pure black/white.
    pub fn palette(&self) -> DuotonePalette {
        match self {
            Theme::PlayfulLight => {
                DuotonePalette::new(Rgb::new(255, 213, 128), Rgb::new(255, 255, 255))
            }
            Theme::PlayfulDark => {
                DuotonePalette::new(Rgb::new(0, 0, 0), Rgb::new(203, 166, 247))
            }
            Theme::CorpoLight | Theme::CorpoDark => DuotonePalette::default(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "playful-light" => Ok(Theme::PlayfulLight),
            "playful-dark" => Ok(Theme::PlayfulDark),
            "corpo-light" => Ok(Theme::CorpoLight),
            "corpo-dark" => Ok(Theme::CorpoDark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown theme '{}' (expected one of: playful-light, playful-dark, corpo-light, corpo-dark)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTheme {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        assert_eq!(Theme::default(), Theme::CorpoLight);
    }

    #[test]
    fn test_playful_palettes() {
        let light = Theme::PlayfulLight.palette();
        assert_eq!(light.dark(), Rgb::new(255, 213, 128));
        assert_eq!(light.light(), Rgb::new(255, 255, 255));

        let dark = Theme::PlayfulDark.palette();
        assert_eq!(dark.dark(), Rgb::new(0, 0, 0));
        assert_eq!(dark.light(), Rgb::new(203, 166, 247));
    }

    #[test]
    fn test_corpo_themes_fall_back_to_black_and_white() {
        assert_eq!(Theme::CorpoLight.palette(), DuotonePalette::default());
        assert_eq!(Theme::CorpoDark.palette(), DuotonePalette::default());
    }

    #[test]
    fn test_round_trip_names() {
        for theme in [
            Theme::PlayfulLight,
            Theme::PlayfulDark,
            Theme::CorpoLight,
            Theme::CorpoDark,
        ] {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_parse_unknown_theme() {
        assert!("solarized".parse::<Theme>().is_err());
    }
}
