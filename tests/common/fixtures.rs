//! Test fixtures and constants.

/// Query-string encoded colour inputs
pub mod colors {
    /// The default configured colour
    pub const ORANGE_RED: &str = "%23FF4400";

    /// Short hex without the leading '#'
    pub const SHORT_HEX: &str = "123";

    /// rgb() notation, URL-encoded
    pub const RGB: &str = "rgb(255%2C%2068%2C%200)";

    /// hsl() notation for pure red, URL-encoded
    pub const HSL_RED: &str = "hsl(0%2C%20100%25%2C%2050%25)";

    /// A named colour
    pub const NAMED: &str = "orange";

    /// Not a colour in any notation
    pub const INVALID: &str = "not-a-colour";
}

/// The eleven step labels in order
pub const STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Sample config.yaml contents
pub const CUSTOM_CONFIG_YAML: &str = r##"
default_color: "#3366CC"
default_name: brand
default_format: android
cache_max_age: 60
"##;
