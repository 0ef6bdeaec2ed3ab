use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ThemeError;

/// Visual theme in effect on the page
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// All supported themes
    pub const fn all() -> &'static [Self] {
        &[Self::Light, Self::Dark]
    }

    /// String identifier used in markup and by the provider
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::Unknown(s.to_string())),
        }
    }
}

/// Theme requested by a switch moving to `checked`.
///
/// Checked means dark, unchecked means light.
pub const fn theme_for_checked(checked: bool) -> Theme {
    if checked { Theme::Dark } else { Theme::Light }
}

/// Display state of the toggle.
///
/// Never reflects the real theme before mount, so server and client markup agree.
pub fn is_checked(mounted: bool, resolved_theme: Option<Theme>) -> bool {
    mounted && resolved_theme.is_some_and(Theme::is_dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Dark ".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn display_matches_identifier() {
        for theme in Theme::all() {
            assert_eq!(theme.to_string(), theme.as_str());
        }
    }
}
