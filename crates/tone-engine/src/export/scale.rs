//! Whole-scale exporters

use super::{format_oklch, hex_digits, unit_channels, ExportFormat, ScaleName};
use crate::scale::{ColourScale, Swatch};

/// Render a scale as a code snippet in the given dialect.
///
/// ```
/// use tone_engine::{export_scale, synthesize, ExportFormat, Rgb8, ScaleName};
///
/// let scale = synthesize(Rgb8::new(255, 68, 0));
/// let css = export_scale(&scale, &ScaleName::new("brand"), ExportFormat::Css);
/// assert!(css.contains("  --brand-400: #FF4400;"));
/// ```
pub fn export_scale(scale: &ColourScale, name: &ScaleName, format: ExportFormat) -> String {
    match format {
        ExportFormat::Css => css(scale, name),
        ExportFormat::Tailwind => tailwind(scale, name),
        ExportFormat::Swift => swift(scale, name),
        ExportFormat::Android => android(scale, name),
    }
}

fn lines(scale: &ColourScale, line: impl Fn(&Swatch) -> String) -> String {
    scale
        .swatches()
        .iter()
        .map(line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn css(scale: &ColourScale, name: &ScaleName) -> String {
    let vars = lines(scale, |s| {
        format!("  --{name}-{}: {};", s.step, format_oklch(s.oklch))
    });
    let fallback = lines(scale, |s| format!("    --{name}-{}: {};", s.step, s.hex()));

    format!(
        ":root {{
  /* OKLCH (Modern Browsers) */
{vars}
}}

/* HEX Fallback */
@supports not (color: oklch(0% 0 0)) {{
  :root {{
{fallback}
  }}
}}"
    )
}

fn tailwind(scale: &ColourScale, name: &ScaleName) -> String {
    let entries = lines(scale, |s| {
        format!("          {}: '{}',", s.step, format_oklch(s.oklch))
    });
    let theme = lines(scale, |s| {
        format!("  --color-{name}-{}: {};", s.step, format_oklch(s.oklch))
    });

    format!(
        "/* tailwind.config.js (Tailwind v3) */
module.exports = {{
  theme: {{
    extend: {{
      colors: {{
        '{name}': {{
{entries}
        }},
      }},
    }},
  }},
}}

/* Tailwind v4 @theme */
@theme {{
{theme}
}}

/* Usage */
<div class=\"bg-{name}-500 text-{name}-50\">...</div>"
    )
}

fn swift(scale: &ColourScale, name: &ScaleName) -> String {
    let ident = name.identifier();
    let members = lines(scale, |s| {
        let [r, g, b] = unit_channels(s.rgb);
        format!(
            "    static let {ident}{} = Color(red: {r}, green: {g}, blue: {b})",
            s.step
        )
    });

    format!(
        "import SwiftUI

extension Color {{
{members}
}}

// Usage
Text(\"Hello\")
    .foregroundColor(.{ident}500)
    .background(.{ident}100)"
    )
}

fn android(scale: &ColourScale, name: &ScaleName) -> String {
    let resource = name.as_str().replace('-', "_");
    let ident = name.type_identifier();

    let xml = lines(scale, |s| {
        format!("    <color name=\"{resource}_{}\">{}</color>", s.step, s.hex())
    });
    let compose = lines(scale, |s| {
        format!("    val {ident}{} = Color(0xFF{})", s.step, hex_digits(s.rgb))
    });

    format!(
        "<!-- res/values/colors.xml -->
<resources>
{xml}
</resources>

/* Jetpack Compose */
object {ident}Palette {{
{compose}
}}

// Usage
Text(
    text = \"Hello\",
    color = {ident}Palette.{ident}500
)"
    )
}
