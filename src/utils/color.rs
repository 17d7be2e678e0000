/// Brightness cutoff deciding black vs. white text over a color swatch,
/// on the 0-255 luminance scale.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 150.0;

/// Parses a `#rgb` (length 4) or `#rrggbb` (length 7) hex color string.
/// Any other length, or an unparseable component, yields (0, 0, 0) —
/// malformed input is classified as black rather than rejected.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let digits: Vec<char> = hex.chars().collect();
    let component = |pair: String| u8::from_str_radix(&pair, 16).unwrap_or(0);

    match digits.len() {
        4 => (
            component(format!("{}{}", digits[1], digits[1])),
            component(format!("{}{}", digits[2], digits[2])),
            component(format!("{}{}", digits[3], digits[3])),
        ),
        7 => (
            component(format!("{}{}", digits[1], digits[2])),
            component(format!("{}{}", digits[3], digits[4])),
            component(format!("{}{}", digits[5], digits[6])),
        ),
        _ => (0, 0, 0),
    }
}

/// Perceived brightness, 0-255 (ITU-R BT.601 weights).
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// True when the color is dark enough to need light text over it.
pub fn is_dark_color(hex: &str) -> bool {
    let (r, g, b) = hex_to_rgb(hex);
    luminance(r, g, b) < DARK_LUMINANCE_THRESHOLD
}

/// Text color to render over the given background swatch.
pub fn contrast_color(hex: &str) -> &'static str {
    if is_dark_color(hex) {
        "white"
    } else {
        "black"
    }
}
