//! Semantic palettes mapping UI roles onto brand colors per theme.

use crate::brand::BRAND_COLORS;

/// Text role colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColors {
    /// Body text.
    pub primary: &'static str,
    /// Secondary text.
    pub secondary: &'static str,
    /// Tertiary/hint text.
    pub tertiary: &'static str,
    /// Text on inverse backgrounds.
    pub inverse: &'static str,
    /// Disabled text.
    pub disabled: &'static str,
}

/// Background role colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColors {
    /// Page background.
    pub primary: &'static str,
    /// Raised surfaces.
    pub secondary: &'static str,
    /// Recessed surfaces.
    pub tertiary: &'static str,
    /// Inverse surfaces.
    pub inverse: &'static str,
    /// Modal scrim.
    pub overlay: &'static str,
}

/// Border role colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderColors {
    /// Default border.
    pub primary: &'static str,
    /// Emphasized border.
    pub secondary: &'static str,
    /// Focus ring.
    pub focus: &'static str,
    /// Error state.
    pub error: &'static str,
    /// Warning state.
    pub warning: &'static str,
    /// Success state.
    pub success: &'static str,
}

/// Interaction states for one interactive color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveStates {
    /// Resting color.
    pub default: &'static str,
    /// Hovered color.
    pub hover: &'static str,
    /// Pressed color.
    pub active: &'static str,
    /// Disabled color.
    pub disabled: &'static str,
}

/// Interactive color families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveColors {
    /// Primary actions.
    pub primary: InteractiveStates,
    /// Secondary actions.
    pub secondary: InteractiveStates,
}

/// Complete semantic palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticPalette {
    /// Text colors.
    pub text: TextColors,
    /// Background colors.
    pub background: BackgroundColors,
    /// Border colors.
    pub border: BorderColors,
    /// Interactive colors.
    pub interactive: InteractiveColors,
}

const B: crate::brand::BrandColors = BRAND_COLORS;

/// Light palette; also the default applied at `:root`.
pub const LIGHT_PALETTE: SemanticPalette = SemanticPalette {
    text: TextColors {
        primary: B.neutral.s900,
        secondary: B.neutral.s600,
        tertiary: B.neutral.s500,
        inverse: B.neutral.s50,
        disabled: B.neutral.s400,
    },
    background: BackgroundColors {
        primary: B.neutral.s50,
        secondary: B.neutral.s100,
        tertiary: B.neutral.s200,
        inverse: B.neutral.s900,
        overlay: "rgba(0, 0, 0, 0.5)",
    },
    border: BorderColors {
        primary: B.neutral.s200,
        secondary: B.neutral.s300,
        focus: B.primary.s500,
        error: "#ef4444",
        warning: "#f59e0b",
        success: "#10b981",
    },
    interactive: InteractiveColors {
        primary: InteractiveStates {
            default: B.primary.s600,
            hover: B.primary.s700,
            active: B.primary.s800,
            disabled: B.neutral.s300,
        },
        secondary: InteractiveStates {
            default: B.secondary.s600,
            hover: B.secondary.s700,
            active: B.secondary.s800,
            disabled: B.neutral.s300,
        },
    },
};

/// Dark palette.
pub const DARK_PALETTE: SemanticPalette = SemanticPalette {
    text: TextColors {
        primary: B.neutral.s50,
        secondary: B.neutral.s300,
        tertiary: B.neutral.s400,
        inverse: B.neutral.s900,
        disabled: B.neutral.s600,
    },
    background: BackgroundColors {
        primary: B.neutral.s950,
        secondary: B.neutral.s900,
        tertiary: B.neutral.s800,
        inverse: B.neutral.s50,
        overlay: "rgba(0, 0, 0, 0.7)",
    },
    border: BorderColors {
        primary: B.neutral.s800,
        secondary: B.neutral.s700,
        focus: B.primary.s400,
        error: "#f87171",
        warning: "#fbbf24",
        success: "#34d399",
    },
    interactive: InteractiveColors {
        primary: InteractiveStates {
            default: B.primary.s500,
            hover: B.primary.s400,
            active: B.primary.s300,
            disabled: B.neutral.s700,
        },
        secondary: InteractiveStates {
            default: B.secondary.s500,
            hover: B.secondary.s400,
            active: B.secondary.s300,
            disabled: B.neutral.s700,
        },
    },
};

/// Maximum-contrast palette: pure black/white surfaces with saturated focus and action colors.
pub const HIGH_CONTRAST_PALETTE: SemanticPalette = SemanticPalette {
    text: TextColors {
        primary: "#ffffff",
        secondary: "#ffffff",
        tertiary: B.neutral.s200,
        inverse: "#000000",
        disabled: B.neutral.s400,
    },
    background: BackgroundColors {
        primary: "#000000",
        secondary: "#000000",
        tertiary: B.neutral.s900,
        inverse: "#ffffff",
        overlay: "rgba(0, 0, 0, 0.85)",
    },
    border: BorderColors {
        primary: "#ffffff",
        secondary: "#ffffff",
        focus: "#ffff00",
        error: "#ff6b6b",
        warning: "#ffd400",
        success: "#00ff87",
    },
    interactive: InteractiveColors {
        primary: InteractiveStates {
            default: "#ffff00",
            hover: "#ffffff",
            active: "#ffd400",
            disabled: B.neutral.s600,
        },
        secondary: InteractiveStates {
            default: "#00ffff",
            hover: "#ffffff",
            active: "#00d4d4",
            disabled: B.neutral.s600,
        },
    },
};
