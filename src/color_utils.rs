// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for display colors.

/// Color returned when blending an empty list.
const DEFAULT_BLEND: &str = "#3b82f6";

/// Parse a `#RRGGBB` hex color into its channels.
///
/// Malformed input yields black rather than an error; callers treat colors
/// as display hints only.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return (0, 0, 0);
    }
    let r = u8::from_str_radix(&digits[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&digits[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&digits[4..6], 16).unwrap_or(0);
    (r, g, b)
}

/// Format RGB channels as a `#rrggbb` hex color.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Average a set of colors channel-wise into one representative color.
///
/// Used when several shapes overlap on the map and a single color is
/// needed for the combined area.
pub fn blend_colors<S: AsRef<str>>(colors: &[S]) -> String {
    if colors.is_empty() {
        return DEFAULT_BLEND.to_string();
    }
    if colors.len() == 1 {
        return colors[0].as_ref().to_string();
    }

    let mut sum = (0.0f64, 0.0f64, 0.0f64);
    for color in colors {
        let (r, g, b) = hex_to_rgb(color.as_ref());
        sum.0 += r as f64;
        sum.1 += g as f64;
        sum.2 += b as f64;
    }
    let n = colors.len() as f64;
    rgb_to_hex(
        (sum.0 / n).round() as u8,
        (sum.1 / n).round() as u8,
        (sum.2 / n).round() as u8,
    )
}
