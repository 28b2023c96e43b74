//! Salon color palette and shared style fragments.

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_inverse: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_inverse: &'static str,
    pub border: &'static str,
    pub gold: &'static str,
    pub error: &'static str,
    pub error_bg: &'static str,
    pub success: &'static str,
    pub success_bg: &'static str,
    pub overlay: &'static str,
}

/// Black, gold and silver.
pub const SALON_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#e8e8e8",
    bg_inverse: "#000000",
    text_primary: "#000000",
    text_secondary: "#555555",
    text_inverse: "#ffffff",
    border: "#d4d4d4",
    gold: "#ffd700",
    error: "#e74c3c",
    error_bg: "#fdecea",
    success: "#1e8449",
    success_bg: "#e9f7ef",
    overlay: "rgba(0, 0, 0, 0.6)",
};

pub const HEADING_FONT: &str = "'Playfair Display', Georgia, serif";
pub const BODY_FONT: &str = "'Montserrat', system-ui, -apple-system, sans-serif";

#[must_use]
pub const fn palette() -> &'static ColorPalette {
    &SALON_PALETTE
}
