//! CSS custom-property export for the token store.
//!
//! Token trees flatten to `--group-key: value` declarations. Base tokens live on `:root`; semantic
//! palettes are scoped per theme through the `data-theme` attribute the theme resolver applies.

use crate::brand::{ShadeScale, BRAND_COLORS, SPACING, TYPOGRAPHY};
use crate::semantic::SemanticPalette;
use crate::theme::{ThemeName, THEME_NAMES};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Node of a token tree.
pub enum TokenNode {
    /// Scalar value.
    Value(String),
    /// Ordered list value, emitted comma-joined (font stacks).
    List(Vec<String>),
    /// Named children, emitted in order.
    Group(Vec<(String, TokenNode)>),
}

impl TokenNode {
    fn value(raw: &str) -> Self {
        Self::Value(raw.to_string())
    }

    fn group<I>(children: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, TokenNode)>,
    {
        Self::Group(
            children
                .into_iter()
                .map(|(key, node)| (key.to_string(), node))
                .collect(),
        )
    }

    fn pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self::group(pairs.iter().map(|(key, value)| (*key, Self::value(value))))
    }
}

/// Returns a `var(...)` reference for a dotted token path.
///
/// `css_var("color.brand.primary.500")` yields `var(--color-brand-primary-500)`.
pub fn css_var(path: &str) -> String {
    format!("var(--{})", path.replace('.', "-"))
}

fn kebab_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else if ch == '.' {
            out.push('_');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Flattens a token tree into `(--custom-property, value)` pairs.
pub fn token_declarations(prefix: &str, node: &TokenNode) -> Vec<(String, String)> {
    let mut out = Vec::new();
    collect_declarations(prefix, node, &mut out);
    out
}

fn collect_declarations(prefix: &str, node: &TokenNode, out: &mut Vec<(String, String)>) {
    match node {
        TokenNode::Value(value) => out.push((format!("--{prefix}"), value.clone())),
        TokenNode::List(items) => out.push((format!("--{prefix}"), items.join(", "))),
        TokenNode::Group(children) => {
            for (key, child) in children {
                let key = kebab_key(key);
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}-{key}")
                };
                collect_declarations(&path, child, out);
            }
        }
    }
}

fn shade_tokens(scale: &ShadeScale) -> TokenNode {
    TokenNode::pairs(&scale.steps())
}

/// Theme-independent tokens: brand colors, spacing, typography.
pub fn base_tokens() -> TokenNode {
    let typography = TokenNode::group([
        (
            "fontFamily",
            TokenNode::group([
                (
                    "sans",
                    TokenNode::List(TYPOGRAPHY.font_sans.iter().map(|s| s.to_string()).collect()),
                ),
                (
                    "mono",
                    TokenNode::List(TYPOGRAPHY.font_mono.iter().map(|s| s.to_string()).collect()),
                ),
            ]),
        ),
        ("fontSize", TokenNode::pairs(TYPOGRAPHY.font_size)),
        ("fontWeight", TokenNode::pairs(TYPOGRAPHY.font_weight)),
        ("lineHeight", TokenNode::pairs(TYPOGRAPHY.line_height)),
    ]);

    TokenNode::group([
        (
            "color",
            TokenNode::group([(
                "brand",
                TokenNode::group([
                    ("primary", shade_tokens(&BRAND_COLORS.primary)),
                    ("secondary", shade_tokens(&BRAND_COLORS.secondary)),
                    ("neutral", shade_tokens(&BRAND_COLORS.neutral)),
                ]),
            )]),
        ),
        ("spacing", TokenNode::pairs(SPACING.scale)),
        ("typography", typography),
    ])
}

/// Semantic palette tokens under `color.semantic`.
pub fn palette_tokens(palette: &SemanticPalette) -> TokenNode {
    let states = |s: &crate::semantic::InteractiveStates| {
        TokenNode::pairs(&[
            ("default", s.default),
            ("hover", s.hover),
            ("active", s.active),
            ("disabled", s.disabled),
        ])
    };
    let semantic = TokenNode::group([
        (
            "text",
            TokenNode::pairs(&[
                ("primary", palette.text.primary),
                ("secondary", palette.text.secondary),
                ("tertiary", palette.text.tertiary),
                ("inverse", palette.text.inverse),
                ("disabled", palette.text.disabled),
            ]),
        ),
        (
            "background",
            TokenNode::pairs(&[
                ("primary", palette.background.primary),
                ("secondary", palette.background.secondary),
                ("tertiary", palette.background.tertiary),
                ("inverse", palette.background.inverse),
                ("overlay", palette.background.overlay),
            ]),
        ),
        (
            "border",
            TokenNode::pairs(&[
                ("primary", palette.border.primary),
                ("secondary", palette.border.secondary),
                ("focus", palette.border.focus),
                ("error", palette.border.error),
                ("warning", palette.border.warning),
                ("success", palette.border.success),
            ]),
        ),
        (
            "interactive",
            TokenNode::group([
                ("primary", states(&palette.interactive.primary)),
                ("secondary", states(&palette.interactive.secondary)),
            ]),
        ),
    ]);
    TokenNode::group([("color", TokenNode::group([("semantic", semantic)]))])
}

fn write_block(css: &mut String, selector: &str, node: &TokenNode, indent: &str) {
    css.push_str(indent);
    css.push_str(selector);
    css.push_str(" {\n");
    for (name, value) in token_declarations("", node) {
        css.push_str(&format!("{indent}  {name}: {value};\n"));
    }
    css.push_str(indent);
    css.push_str("}\n");
}

fn theme_selectors(palette: &SemanticPalette) -> Vec<String> {
    THEME_NAMES
        .iter()
        .filter(|theme| theme.palette() == palette)
        .map(|theme| format!("[data-theme=\"{}\"]", theme.as_str()))
        .collect()
}

/// Renders the full token stylesheet.
///
/// Light-family themes share `:root`; every other palette is scoped by `data-theme`, and an
/// unthemed root follows the system dark preference.
pub fn generate_tokens_css() -> String {
    let mut css = String::new();
    write_block(&mut css, ":root", &base_tokens(), "");
    css.push('\n');

    let mut light_selectors = vec![":root".to_string()];
    light_selectors.extend(theme_selectors(ThemeName::Light.palette()));
    write_block(
        &mut css,
        &light_selectors.join(",\n"),
        &palette_tokens(ThemeName::Light.palette()),
        "",
    );

    for theme in [ThemeName::Dark, ThemeName::HighContrast] {
        css.push('\n');
        write_block(
            &mut css,
            &theme_selectors(theme.palette()).join(",\n"),
            &palette_tokens(theme.palette()),
            "",
        );
    }

    css.push_str("\n@media (prefers-color-scheme: dark) {\n");
    write_block(
        &mut css,
        ":root:not([data-theme])",
        &palette_tokens(ThemeName::Dark.palette()),
        "  ",
    );
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn css_var_replaces_path_dots() {
        assert_eq!(css_var("color.brand.primary.500"), "var(--color-brand-primary-500)");
    }

    #[test]
    fn declarations_kebab_case_nested_keys_and_join_lists() {
        let tree = TokenNode::group([
            (
                "fontFamily",
                TokenNode::List(vec!["Inter".to_string(), "sans-serif".to_string()]),
            ),
            ("spacing", TokenNode::pairs(&[("0.5", "0.125rem")])),
        ]);
        assert_eq!(
            token_declarations("", &tree),
            vec![
                ("--font-family".to_string(), "Inter, sans-serif".to_string()),
                ("--spacing-0_5".to_string(), "0.125rem".to_string()),
            ]
        );
    }

    #[test]
    fn stylesheet_scopes_palettes_by_theme_attribute() {
        let css = generate_tokens_css();
        assert!(css.starts_with(":root {\n  --color-brand-primary-50: #eff6ff;"));
        assert!(css.contains("[data-theme=\"light\"],\n[data-theme=\"ocean\"]"));
        assert!(css.contains("[data-theme=\"dark\"],\n[data-theme=\"midnight\"] {"));
        assert!(css.contains("[data-theme=\"high-contrast\"] {"));
        assert!(css.contains("--color-semantic-interactive-primary-hover: #1d4ed8;"));
        assert!(css.contains("  :root:not([data-theme]) {\n    --color-semantic-text-primary: #f9fafb;"));
    }
}
