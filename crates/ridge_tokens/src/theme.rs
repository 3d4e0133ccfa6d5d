//! Theme names and per-element theme modes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::semantic::{SemanticPalette, DARK_PALETTE, HIGH_CONTRAST_PALETTE, LIGHT_PALETTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Closed set of named document themes.
pub enum ThemeName {
    /// Default light theme.
    Light,
    /// Dark theme.
    Dark,
    /// Accessibility high-contrast theme.
    HighContrast,
    /// Blue-green accent theme.
    Ocean,
    /// Green accent theme.
    Forest,
    /// Warm orange accent theme.
    Sunset,
    /// Purple accent theme.
    Purple,
    /// Pink accent theme.
    Rose,
    /// Deep dark theme.
    Midnight,
    /// Grayscale theme.
    Monochrome,
}

/// Every theme name, in cycling order.
pub const THEME_NAMES: [ThemeName; 10] = [
    ThemeName::Light,
    ThemeName::Dark,
    ThemeName::HighContrast,
    ThemeName::Ocean,
    ThemeName::Forest,
    ThemeName::Sunset,
    ThemeName::Purple,
    ThemeName::Rose,
    ThemeName::Midnight,
    ThemeName::Monochrome,
];

impl Default for ThemeName {
    fn default() -> Self {
        Self::Light
    }
}

impl ThemeName {
    /// Stable string token used in markers and persistence.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high-contrast",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
            Self::Purple => "purple",
            Self::Rose => "rose",
            Self::Midnight => "midnight",
            Self::Monochrome => "monochrome",
        }
    }

    /// Parses a stable token. Surrounding whitespace is ignored; matching is exact otherwise.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        THEME_NAMES.into_iter().find(|theme| theme.as_str() == raw)
    }

    /// Returns all theme names.
    pub fn all() -> &'static [ThemeName] {
        &THEME_NAMES
    }

    /// Whether the theme renders on a dark surface.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::Midnight | Self::HighContrast)
    }

    /// Semantic palette the theme's custom properties derive from.
    pub fn palette(self) -> &'static SemanticPalette {
        match self {
            Self::HighContrast => &HIGH_CONTRAST_PALETTE,
            Self::Dark | Self::Midnight => &DARK_PALETTE,
            _ => &LIGHT_PALETTE,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Per-element `theme` attribute value.
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the system dark-preference signal.
    Auto,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl ThemeMode {
    /// Stable attribute token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Parses an attribute token; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}
