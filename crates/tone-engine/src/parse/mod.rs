//! Colour string parsing
//!
//! Input is trimmed and lower-cased, then offered to an ordered chain of
//! matchers. Each matcher handles one notation and returns `None` when the
//! string is not in its notation; the first match wins.
//!
//! | Notation | Examples |
//! |----------|----------|
//! | Hex | `#FF4400`, `ff4400`, `#f40`, `f40` |
//! | `rgb()` / `rgba()` | `rgb(255, 68, 0)`, `rgba(255,68,0,0.5)` |
//! | `hsl()` / `hsla()` | `hsl(16, 100%, 50%)`, `hsla(16deg, 100%, 50%, 1)` |
//! | Named | `red`, `orange`, `purple`, ... |
//!
//! ```
//! use tone_engine::{parse, Rgb8};
//!
//! assert_eq!(parse("#123").unwrap(), Rgb8::new(0x11, 0x22, 0x33));
//! assert_eq!(parse("hsl(0, 100%, 50%)").unwrap(), parse("#FF0000").unwrap());
//! assert!(parse("not a colour").is_err());
//! ```

mod error;

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Hsl, Rgb8};

pub use error::ParseError;

/// One notation-specific matcher.
type Matcher = fn(&str) -> Option<Rgb8>;

/// Matchers in priority order.
const MATCHERS: [Matcher; 4] = [parse_hex, parse_rgb, parse_hsl, parse_named];

/// CSS basic colour names and their hex values.
pub const NAMED_COLORS: [(&str, &str); 11] = [
    ("red", "#ff0000"),
    ("green", "#00ff00"),
    ("blue", "#0000ff"),
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("yellow", "#ffff00"),
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("pink", "#ffc0cb"),
];

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\s*\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*\d*\.?\d+%?\s*)?\)$",
    )
    .expect("rgb pattern is valid")
});

static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\s*\(\s*(\d*\.?\d+)(?:deg)?\s*,\s*(\d*\.?\d+)%?\s*,\s*(\d*\.?\d+)%?\s*(?:,\s*\d*\.?\d+%?\s*)?\)$",
    )
    .expect("hsl pattern is valid")
});

/// Parse a colour string into 8-bit sRGB.
///
/// # Errors
///
/// [`ParseError::Unrecognized`] when no notation matches, or when a matching
/// notation carries out-of-range values (an `rgb()` channel above 255, an
/// `hsl()` saturation or lightness above 100%).
pub fn parse(input: &str) -> Result<Rgb8, ParseError> {
    let normalized = input.trim().to_lowercase();
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(&normalized))
        .ok_or_else(|| ParseError::Unrecognized(input.to_string()))
}

/// `#rrggbb`, `rrggbb`, `#rgb` or `rgb`; the short form duplicates each nibble.
fn parse_hex(s: &str) -> Option<Rgb8> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
            Some(Rgb8::new(
                nibble(0)? * 17,
                nibble(1)? * 17,
                nibble(2)? * 17,
            ))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(Rgb8::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`; alpha is ignored.
fn parse_rgb(s: &str) -> Option<Rgb8> {
    let caps = RGB_PATTERN.captures(s)?;
    let channel = |i: usize| caps[i].parse::<u8>().ok();
    Some(Rgb8::new(channel(1)?, channel(2)?, channel(3)?))
}

/// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`; alpha is ignored.
fn parse_hsl(s: &str) -> Option<Rgb8> {
    let caps = HSL_PATTERN.captures(s)?;
    let number = |i: usize| caps[i].parse::<f64>().ok();
    let (h, sat, light) = (number(1)?, number(2)?, number(3)?);
    if sat > 100.0 || light > 100.0 {
        return None;
    }
    Some(Hsl::new(h, sat, light).to_rgb8())
}

/// One of [`NAMED_COLORS`], resolved through the hex matcher.
fn parse_named(s: &str) -> Option<Rgb8> {
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == s)
        .and_then(|(_, hex)| parse_hex(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_six_digits() {
        assert_eq!(parse("#FF4400"), Ok(Rgb8::new(255, 68, 0)));
        assert_eq!(parse("ff4400"), Ok(Rgb8::new(255, 68, 0)));
        assert_eq!(parse("#AbCdEf"), parse("#abcdef"));
    }

    #[test]
    fn test_hex_shorthand_expands() {
        assert_eq!(parse("#123"), Ok(Rgb8::new(0x11, 0x22, 0x33)));
        assert_eq!(parse("f0a"), Ok(Rgb8::new(0xFF, 0x00, 0xAA)));
        assert_eq!(parse("#123").unwrap().to_hex(), "#112233");
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        for input in ["#GGG", "#FFFF", "", "#", "#12345", "#1234567", "+12", "#-12"] {
            assert!(
                matches!(parse(input), Err(ParseError::Unrecognized(_))),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse("  #FFFFFF  "), Ok(Rgb8::new(255, 255, 255)));
        assert_eq!(parse("\tred\n"), Ok(Rgb8::new(255, 0, 0)));
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(parse("rgb(255, 68, 0)"), Ok(Rgb8::new(255, 68, 0)));
        assert_eq!(parse("rgb(255,68,0)"), Ok(Rgb8::new(255, 68, 0)));
        assert_eq!(parse("RGB( 1 , 2 , 3 )"), Ok(Rgb8::new(1, 2, 3)));
        assert_eq!(parse("rgba(10, 20, 30, 0.5)"), Ok(Rgb8::new(10, 20, 30)));
        assert_eq!(parse("rgba(10, 20, 30, 50%)"), Ok(Rgb8::new(10, 20, 30)));
    }

    #[test]
    fn test_rgb_rejects_out_of_range_and_garbage() {
        assert!(parse("rgb(256, 0, 0)").is_err());
        assert!(parse("rgb(1, 2)").is_err());
        assert!(parse("rgb(a, b, c)").is_err());
        assert!(parse("rgb(1, 2, 3").is_err());
    }

    #[test]
    fn test_hsl_function() {
        assert_eq!(parse("hsl(0, 100%, 50%)"), parse("#FF0000"));
        assert_eq!(parse("hsl(120,100%,50%)"), Ok(Rgb8::new(0, 255, 0)));
        assert_eq!(parse("hsla(240, 100%, 50%, 0.3)"), Ok(Rgb8::new(0, 0, 255)));
        assert_eq!(parse("hsl(360, 100%, 50%)"), Ok(Rgb8::new(255, 0, 0)));
        assert_eq!(parse("hsl(16deg, 100, 50)"), Ok(Rgb8::new(255, 68, 0)));
        assert_eq!(parse("hsl(0, 0%, 50.2%)"), Ok(Rgb8::new(128, 128, 128)));
    }

    #[test]
    fn test_hsl_rejects_out_of_range() {
        assert!(parse("hsl(0, 101%, 50%)").is_err());
        assert!(parse("hsl(0, 100%, 150%)").is_err());
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse("red"), Ok(Rgb8::new(255, 0, 0)));
        assert_eq!(parse("Orange"), Ok(Rgb8::new(255, 165, 0)));
        assert_eq!(parse("PURPLE"), Ok(Rgb8::new(128, 0, 128)));
        assert_eq!(parse("pink"), Ok(Rgb8::new(255, 192, 203)));
        assert!(parse("rebeccapurple").is_err());
    }

    #[test]
    fn test_every_named_color_resolves() {
        for (name, hex) in NAMED_COLORS {
            assert_eq!(parse(name), parse(hex), "{name}");
        }
    }

    #[test]
    fn test_error_keeps_original_input() {
        assert_eq!(
            parse(" Nope "),
            Err(ParseError::Unrecognized(" Nope ".to_string()))
        );
    }

    #[test]
    fn test_idempotent_through_hex() {
        for input in ["#ff4400", "#123", "rgb(9, 99, 199)", "hsl(200, 40%, 30%)", "pink"] {
            let first = parse(input).unwrap();
            assert_eq!(parse(&first.to_hex()), Ok(first), "{input}");
        }
    }
}
