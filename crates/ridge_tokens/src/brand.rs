//! Brand-level color, spacing, and typography scales.

/// Eleven-step shade scale from lightest (`50`) to darkest (`950`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeScale {
    /// Shade 50.
    pub s50: &'static str,
    /// Shade 100.
    pub s100: &'static str,
    /// Shade 200.
    pub s200: &'static str,
    /// Shade 300.
    pub s300: &'static str,
    /// Shade 400.
    pub s400: &'static str,
    /// Shade 500.
    pub s500: &'static str,
    /// Shade 600.
    pub s600: &'static str,
    /// Shade 700.
    pub s700: &'static str,
    /// Shade 800.
    pub s800: &'static str,
    /// Shade 900.
    pub s900: &'static str,
    /// Shade 950.
    pub s950: &'static str,
}

impl ShadeScale {
    /// Returns `(step, value)` pairs in ascending step order.
    pub fn steps(&self) -> [(&'static str, &'static str); 11] {
        [
            ("50", self.s50),
            ("100", self.s100),
            ("200", self.s200),
            ("300", self.s300),
            ("400", self.s400),
            ("500", self.s500),
            ("600", self.s600),
            ("700", self.s700),
            ("800", self.s800),
            ("900", self.s900),
            ("950", self.s950),
        ]
    }
}

/// Brand color scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandColors {
    /// Primary (blue) scale.
    pub primary: ShadeScale,
    /// Secondary (violet) scale.
    pub secondary: ShadeScale,
    /// Neutral (gray) scale.
    pub neutral: ShadeScale,
}

/// Brand palette.
pub const BRAND_COLORS: BrandColors = BrandColors {
    primary: ShadeScale {
        s50: "#eff6ff",
        s100: "#dbeafe",
        s200: "#bfdbfe",
        s300: "#93c5fd",
        s400: "#60a5fa",
        s500: "#3b82f6",
        s600: "#2563eb",
        s700: "#1d4ed8",
        s800: "#1e40af",
        s900: "#1e3a8a",
        s950: "#172554",
    },
    secondary: ShadeScale {
        s50: "#f5f3ff",
        s100: "#ede9fe",
        s200: "#ddd6fe",
        s300: "#c4b5fd",
        s400: "#a78bfa",
        s500: "#8b5cf6",
        s600: "#7c3aed",
        s700: "#6d28d9",
        s800: "#5b21b6",
        s900: "#4c1d95",
        s950: "#2e1065",
    },
    neutral: ShadeScale {
        s50: "#f9fafb",
        s100: "#f3f4f6",
        s200: "#e5e7eb",
        s300: "#d1d5db",
        s400: "#9ca3af",
        s500: "#6b7280",
        s600: "#4b5563",
        s700: "#374151",
        s800: "#1f2937",
        s900: "#111827",
        s950: "#030712",
    },
};

/// Spacing scale as `(name, rem value)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    /// Ordered scale entries.
    pub scale: &'static [(&'static str, &'static str)],
}

/// Spacing tokens.
pub const SPACING: Spacing = Spacing {
    scale: &[
        ("0", "0"),
        ("px", "1px"),
        ("0.5", "0.125rem"),
        ("1", "0.25rem"),
        ("2", "0.5rem"),
        ("3", "0.75rem"),
        ("4", "1rem"),
        ("6", "1.5rem"),
        ("8", "2rem"),
        ("12", "3rem"),
        ("16", "4rem"),
    ],
};

impl Spacing {
    /// Looks up a spacing value by scale name.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.scale
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

/// Typography scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    /// Sans-serif font stack.
    pub font_sans: &'static [&'static str],
    /// Monospace font stack.
    pub font_mono: &'static [&'static str],
    /// Font sizes, smallest first.
    pub font_size: &'static [(&'static str, &'static str)],
    /// Font weights.
    pub font_weight: &'static [(&'static str, &'static str)],
    /// Line heights.
    pub line_height: &'static [(&'static str, &'static str)],
}

/// Typography tokens.
pub const TYPOGRAPHY: Typography = Typography {
    font_sans: &["system-ui", "-apple-system", "Segoe UI", "Roboto", "sans-serif"],
    font_mono: &["ui-monospace", "SFMono-Regular", "Menlo", "monospace"],
    font_size: &[
        ("xs", "0.75rem"),
        ("sm", "0.875rem"),
        ("base", "1rem"),
        ("lg", "1.125rem"),
        ("xl", "1.25rem"),
        ("2xl", "1.5rem"),
        ("3xl", "1.875rem"),
        ("4xl", "2.25rem"),
    ],
    font_weight: &[
        ("normal", "400"),
        ("medium", "500"),
        ("semibold", "600"),
        ("bold", "700"),
    ],
    line_height: &[
        ("tight", "1.25"),
        ("normal", "1.5"),
        ("relaxed", "1.75"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_lookup_finds_named_steps() {
        assert_eq!(SPACING.get("4"), Some("1rem"));
        assert_eq!(SPACING.get("px"), Some("1px"));
        assert_eq!(SPACING.get("5"), None);
    }

    #[test]
    fn shade_steps_are_ordered_light_to_dark() {
        let steps = BRAND_COLORS.primary.steps();
        assert_eq!(steps[0], ("50", "#eff6ff"));
        assert_eq!(steps[5], ("500", "#3b82f6"));
        assert_eq!(steps[10].0, "950");
    }
}
