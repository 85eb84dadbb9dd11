//! Text renderings of colours and scales
//!
//! Single colours render to web notations (hex, `rgb()`, `hsl()`, `oklch()`)
//! and to platform snippets for SwiftUI, Android and Tailwind; [`ColorFormats`]
//! bundles all of them. Whole scales export through [`export_scale`] in one of
//! the [`ExportFormat`] dialects.

mod format;
mod name;
mod scale;

pub use format::{ExportFormat, UnknownFormat};
pub use name::ScaleName;
pub use scale::export_scale;

use crate::color::{Hsl, Oklch, Rgb8};

/// `#RRGGBB`, uppercase.
pub fn format_hex(rgb: Rgb8) -> String {
    rgb.to_hex()
}

/// `rgb(r, g, b)`
pub fn format_rgb(rgb: Rgb8) -> String {
    format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
}

/// `hsl(h, s%, l%)` with whole numbers.
pub fn format_hsl(rgb: Rgb8) -> String {
    let hsl = Hsl::from(rgb).rounded();
    format!("hsl({:.0}, {:.0}%, {:.0}%)", hsl.h, hsl.s, hsl.l)
}

/// `oklch(L C H)` with three decimals for L and C and one for H.
pub fn format_oklch(lch: Oklch) -> String {
    format!("oklch({:.3} {:.3} {:.1})", lch.l, lch.c, lch.h)
}

/// Channels normalized to 0..1 with three decimals, as SwiftUI expects them.
pub(crate) fn unit_channels(rgb: Rgb8) -> [String; 3] {
    rgb.to_bytes()
        .map(|channel| format!("{:.3}", f64::from(channel) / 255.0))
}

/// SwiftUI `Color(red:green:blue:)` initializer.
pub fn format_swift(rgb: Rgb8) -> String {
    let [r, g, b] = unit_channels(rgb);
    format!("Color(red: {r}, green: {g}, blue: {b})")
}

/// `Color.rgb(...)` call plus the ARGB literal.
pub fn format_android(rgb: Rgb8) -> String {
    format!(
        "Color.rgb({}, {}, {})\n// Or: #FF{} (ARGB)",
        rgb.r,
        rgb.g,
        rgb.b,
        hex_digits(rgb)
    )
}

/// Tailwind v4 theme variable plus an arbitrary-value class.
pub fn format_tailwind(rgb: Rgb8) -> String {
    let hex = rgb.to_hex();
    format!(
        "/* Tailwind v4 @theme */\n--color-custom: {hex};\n\n/* Or arbitrary value */\nclass=\"bg-[{hex}]\""
    )
}

/// `RRGGBB` without the leading `#`.
pub(crate) fn hex_digits(rgb: Rgb8) -> String {
    format!("{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Every single-colour notation for one colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub oklch: String,
    pub swift: String,
    pub android: String,
    pub tailwind: String,
}

impl ColorFormats {
    pub fn from_rgb8(rgb: Rgb8) -> Self {
        Self {
            hex: format_hex(rgb),
            rgb: format_rgb(rgb),
            hsl: format_hsl(rgb),
            oklch: format_oklch(Oklch::from(rgb)),
            swift: format_swift(rgb),
            android: format_android(rgb),
            tailwind: format_tailwind(rgb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORANGE_RED: Rgb8 = Rgb8::new(255, 68, 0);

    #[test]
    fn test_web_notations() {
        assert_eq!(format_hex(ORANGE_RED), "#FF4400");
        assert_eq!(format_rgb(ORANGE_RED), "rgb(255, 68, 0)");
        assert_eq!(format_hsl(ORANGE_RED), "hsl(16, 100%, 50%)");
        assert_eq!(format_hsl(Rgb8::new(128, 128, 128)), "hsl(0, 0%, 50%)");
    }

    #[test]
    fn test_oklch_notation() {
        assert_eq!(format_oklch(Oklch::new(0.5, 0.1234, 30.06)), "oklch(0.500 0.123 30.1)");
        assert_eq!(format_oklch(Oklch::new(1.0, 0.0, 0.0)), "oklch(1.000 0.000 0.0)");

        let formatted = format_oklch(Oklch::from(ORANGE_RED));
        assert!(formatted.starts_with("oklch(0.659 0.230 35."), "{formatted}");
    }

    #[test]
    fn test_swift_notation() {
        assert_eq!(
            format_swift(ORANGE_RED),
            "Color(red: 1.000, green: 0.267, blue: 0.000)"
        );
    }

    #[test]
    fn test_android_notation() {
        assert_eq!(
            format_android(Rgb8::new(18, 52, 171)),
            "Color.rgb(18, 52, 171)\n// Or: #FF1234AB (ARGB)"
        );
    }

    #[test]
    fn test_tailwind_notation() {
        assert_eq!(
            format_tailwind(ORANGE_RED),
            "/* Tailwind v4 @theme */\n--color-custom: #FF4400;\n\n/* Or arbitrary value */\nclass=\"bg-[#FF4400]\""
        );
    }

    #[test]
    fn test_color_formats_bundle() {
        let formats = ColorFormats::from_rgb8(ORANGE_RED);
        assert_eq!(formats.hex, "#FF4400");
        assert_eq!(formats.rgb, format_rgb(ORANGE_RED));
        assert_eq!(formats.hsl, format_hsl(ORANGE_RED));
        assert_eq!(formats.oklch, format_oklch(Oklch::from(ORANGE_RED)));
        assert_eq!(formats.swift, format_swift(ORANGE_RED));
        assert_eq!(formats.android, format_android(ORANGE_RED));
        assert_eq!(formats.tailwind, format_tailwind(ORANGE_RED));
    }
}
