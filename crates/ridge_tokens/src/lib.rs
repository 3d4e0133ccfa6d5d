//! Design-token store for the Ridge UI component crates.
//!
//! Tokens are static data: brand color scales, spacing and typography scales, and the semantic
//! palettes each theme maps onto. The same values are exposed to stylesheets as CSS custom
//! properties through [`generate_tokens_css`], which is the stable contract external styles read.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod brand;
pub mod css;
pub mod semantic;
pub mod theme;

pub use brand::{BrandColors, ShadeScale, Spacing, Typography, BRAND_COLORS, SPACING, TYPOGRAPHY};
pub use css::{css_var, generate_tokens_css, token_declarations, TokenNode};
pub use semantic::{
    BackgroundColors, BorderColors, InteractiveColors, InteractiveStates, SemanticPalette,
    TextColors, DARK_PALETTE, HIGH_CONTRAST_PALETTE, LIGHT_PALETTE,
};
pub use theme::{ThemeMode, ThemeName, THEME_NAMES};
