//! Tonal scale synthesis (50-950)
//!
//! One input colour becomes eleven tones sharing its Oklch hue. Each step has
//! a fixed target lightness. Chroma is redistributed with a triangular
//! approximation of the maximum displayable chroma per lightness, so that the
//! input's relative saturation carries over to every step. The step whose
//! target lightness is nearest the input keeps the input colour verbatim.
//!
//! The triangle is a stand-in for a real per-hue gamut boundary; blues and
//! greens come out less even than reds and magentas. Each generated step is
//! passed through [`GamutMapper`] afterwards.
//!
//! ```
//! use tone_engine::{synthesize, Rgb8};
//!
//! let scale = synthesize(Rgb8::new(255, 68, 0));
//! assert_eq!(scale.swatches().len(), 11);
//! assert_eq!(scale.input_swatch().rgb, Rgb8::new(255, 68, 0));
//! assert_eq!(scale.input_step().value(), 400);
//! ```

use std::fmt;

use crate::color::{Oklch, Rgb8};
use crate::gamut::GamutMapper;

/// Step labels and their target Oklch lightness, lightest first.
pub const STEP_LIGHTNESS: [(u16, f64); 11] = [
    (50, 0.97),
    (100, 0.93),
    (200, 0.87),
    (300, 0.78),
    (400, 0.68),
    (500, 0.58),
    (600, 0.48),
    (700, 0.39),
    (800, 0.30),
    (900, 0.22),
    (950, 0.14),
];

/// Peak of the triangular maximum-chroma approximation.
const PEAK_CHROMA: f64 = 0.4;

/// Lightness at which the triangle peaks.
const PEAK_LIGHTNESS: f64 = 0.5;

/// Below this estimated maximum, the input's chroma ratio is meaningless.
const NEGLIGIBLE_MAX_CHROMA: f64 = 0.001;

/// Share of the target maximum used when the ratio cannot be computed.
const FALLBACK_CHROMA_SHARE: f64 = 0.5;

/// Inputs with less chroma than this are neutral; their scale stays neutral.
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// One label of the fixed 50-950 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Step(u16);

impl Step {
    /// Every step, lightest first.
    pub const ALL: [Step; 11] = [
        Step(50),
        Step(100),
        Step(200),
        Step(300),
        Step(400),
        Step(500),
        Step(600),
        Step(700),
        Step(800),
        Step(900),
        Step(950),
    ];

    /// The numeric label (50, 100, ..., 950).
    #[inline]
    pub fn value(self) -> u16 {
        self.0
    }

    /// The fixed target lightness of this step.
    pub fn target_lightness(self) -> f64 {
        STEP_LIGHTNESS
            .iter()
            .find(|(step, _)| *step == self.0)
            .map_or(PEAK_LIGHTNESS, |(_, lightness)| *lightness)
    }
}

impl TryFrom<u16> for Step {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Step::ALL
            .into_iter()
            .find(|step| step.0 == value)
            .ok_or(value)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One entry of a synthesized scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    /// Scale label
    pub step: Step,
    /// Oklch after gamut mapping (the input's own Oklch for the input step)
    pub oklch: Oklch,
    /// Displayed colour
    pub rgb: Rgb8,
    /// Whether this step reproduces the input colour verbatim
    pub is_input: bool,
}

impl Swatch {
    /// Uppercase `#RRGGBB`.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

/// Eleven swatches sharing one hue, ordered 50 to 950.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourScale {
    input: Rgb8,
    base: Oklch,
    input_step: Step,
    swatches: Vec<Swatch>,
}

impl ColourScale {
    /// The colour the scale was built from.
    pub fn input(&self) -> Rgb8 {
        self.input
    }

    /// The input colour in Oklch.
    pub fn base(&self) -> Oklch {
        self.base
    }

    /// The step that carries the input colour.
    pub fn input_step(&self) -> Step {
        self.input_step
    }

    /// All swatches, lightest first.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The swatch at a given step.
    pub fn get(&self, step: Step) -> Option<&Swatch> {
        self.swatches.iter().find(|swatch| swatch.step == step)
    }

    /// The swatch flagged as the input.
    pub fn input_swatch(&self) -> &Swatch {
        // synthesize() always emits the input step
        &self.swatches[Step::ALL
            .iter()
            .position(|step| *step == self.input_step)
            .unwrap_or_default()]
    }
}

/// Approximate maximum displayable chroma at a lightness.
///
/// A triangle peaking at 0.4 for lightness 0.5, reaching zero at black and
/// white.
pub fn max_chroma_at(lightness: f64) -> f64 {
    if lightness <= PEAK_LIGHTNESS {
        PEAK_CHROMA * (lightness / PEAK_LIGHTNESS)
    } else {
        PEAK_CHROMA * ((1.0 - lightness) / PEAK_LIGHTNESS)
    }
}

/// The step whose target lightness is nearest; ties go to the lighter step.
pub fn find_closest_step(lightness: f64) -> Step {
    let mut closest = Step(500);
    let mut closest_distance = f64::INFINITY;

    for step in Step::ALL {
        let distance = (lightness - step.target_lightness()).abs();
        if distance < closest_distance {
            closest_distance = distance;
            closest = step;
        }
    }

    closest
}

/// Chroma for a target lightness that keeps the base colour's share of the
/// estimated maximum chroma.
pub fn target_chroma(base: Oklch, target_lightness: f64) -> f64 {
    if base.c < ACHROMATIC_CHROMA {
        return 0.0;
    }

    let base_max = max_chroma_at(base.l);
    let target_max = max_chroma_at(target_lightness);

    if base_max < NEGLIGIBLE_MAX_CHROMA {
        return target_max * FALLBACK_CHROMA_SHARE;
    }

    let ratio = base.c / base_max;
    target_max.min(target_max * ratio)
}

/// Build the 50-950 scale for one colour.
///
/// Pure: the same input always yields the same scale.
pub fn synthesize(input: Rgb8) -> ColourScale {
    synthesize_with(input, &GamutMapper::default())
}

/// [`synthesize`] with a custom gamut mapper.
pub fn synthesize_with(input: Rgb8, mapper: &GamutMapper) -> ColourScale {
    let base = Oklch::from(input);
    let input_step = find_closest_step(base.l);

    let swatches = Step::ALL
        .into_iter()
        .map(|step| {
            if step == input_step {
                return Swatch {
                    step,
                    oklch: base,
                    rgb: input,
                    is_input: true,
                };
            }

            let lightness = step.target_lightness();
            let candidate = Oklch {
                l: lightness,
                c: target_chroma(base, lightness),
                h: base.h,
            };
            let oklch = mapper.clamp(candidate).color;

            Swatch {
                step,
                oklch,
                rgb: oklch.to_rgb8(),
                is_input: false,
            }
        })
        .collect();

    ColourScale {
        input,
        base,
        input_step,
        swatches,
    }
}
