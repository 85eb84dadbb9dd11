//! Scale names as they appear in generated identifiers

use std::fmt;

const DEFAULT_NAME: &str = "primary";

/// A normalized scale name: lowercase, hyphen-separated, never empty.
///
/// ```
/// use tone_engine::ScaleName;
///
/// let name = ScaleName::new("  Brand   Blue ");
/// assert_eq!(name.as_str(), "brand-blue");
/// assert_eq!(name.identifier(), "brandBlue");
/// assert_eq!(name.type_identifier(), "BrandBlue");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaleName(String);

impl ScaleName {
    pub fn new(raw: &str) -> Self {
        let normalized = raw
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");

        if normalized.is_empty() {
            Self(DEFAULT_NAME.to_string())
        } else {
            Self(normalized)
        }
    }

    /// The hyphenated form, used in CSS variables, Tailwind keys and Android
    /// resource names.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// lowerCamelCase, for Swift members.
    pub fn identifier(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        for (i, part) in self.0.split('-').filter(|p| !p.is_empty()).enumerate() {
            if i == 0 {
                out.push_str(part);
            } else {
                out.push_str(&capitalize(part));
            }
        }
        out
    }

    /// UpperCamelCase, for Kotlin objects and constants.
    pub fn type_identifier(&self) -> String {
        capitalize(&self.identifier())
    }
}

impl Default for ScaleName {
    fn default() -> Self {
        Self(DEFAULT_NAME.to_string())
    }
}

impl fmt::Display for ScaleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
