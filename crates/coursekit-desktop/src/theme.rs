//! Theme configuration for the desktop app

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Parse a theme name, falling back to light for unknown values.
pub fn parse_theme(raw: &str) -> ResolvedTheme {
    if raw.trim().eq_ignore_ascii_case("dark") {
        ResolvedTheme::Dark
    } else {
        if !raw.trim().eq_ignore_ascii_case("light") {
            tracing::warn!("Unknown theme '{}', defaulting to light", raw.trim());
        }
        ResolvedTheme::Light
    }
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_row: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f1f5f9",
    bg_row: "#e9d5ff",
    text_primary: "#1a1a1a",
    text_muted: "#64748b",
    border: "#dadce0",
    accent: "#4f46e5",
    accent_text: "#ffffff",
    error: "#dc2626",
    success: "#16a34a",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1a1a1a",
    bg_secondary: "#242424",
    bg_row: "#3b2a55",
    text_primary: "#e8eaed",
    text_muted: "#9aa0a6",
    border: "#3c4043",
    accent: "#818cf8",
    accent_text: "#1a1a1a",
    error: "#f87171",
    success: "#4ade80",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}
