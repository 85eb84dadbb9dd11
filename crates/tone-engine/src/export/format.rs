//! Scale export dialects

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Target dialect for a whole-scale export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// CSS custom properties in OKLCH with a hex fallback
    #[default]
    Css,
    /// Tailwind v3 config and v4 `@theme` block
    Tailwind,
    /// SwiftUI `Color` extension
    Swift,
    /// Android resources and a Jetpack Compose palette
    Android,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::Swift,
        ExportFormat::Android,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Swift => "swift",
            ExportFormat::Android => "android",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The requested export format name is not one of [`ExportFormat::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown export format: {0:?} (expected css, tailwind, swift or android)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "tailwind" => Ok(ExportFormat::Tailwind),
            "swift" | "swiftui" => Ok(ExportFormat::Swift),
            "android" | "compose" => Ok(ExportFormat::Android),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
