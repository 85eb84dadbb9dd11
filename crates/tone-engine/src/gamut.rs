//! Gamut mapping by iterative chroma reduction
//!
//! There is no closed-form sRGB gamut boundary here. An out-of-gamut colour
//! is pulled toward the neutral axis by shrinking chroma in fixed proportional
//! steps until its sRGB channels fit, keeping lightness and hue. The search is
//! bounded and always terminates.
//!
//! ```
//! use tone_engine::{clamp_to_gamut, Oklch};
//!
//! let vivid = Oklch::new(0.9, 0.4, 30.0);
//! let clamped = clamp_to_gamut(vivid);
//! assert!(clamped.c < vivid.c);
//! assert_eq!(clamped.h, vivid.h);
//! ```

use crate::color::Oklch;

/// Chroma multiplier applied per iteration.
pub const CHROMA_REDUCTION_FACTOR: f64 = 0.95;

/// Iteration cap.
pub const MAX_ITERATIONS: u32 = 50;

/// Below this chroma the colour is treated as neutral and the search stops.
pub const MIN_CHROMA: f64 = 0.001;

/// Slack, in 8-bit units, allowed outside 0..=255 before rounding.
pub const GAMUT_TOLERANCE: f64 = 0.5;

/// Tunables for the chroma-reduction search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMapper {
    /// Chroma multiplier per iteration (0.0 < factor < 1.0)
    pub factor: f64,
    /// Maximum number of reductions
    pub max_iterations: u32,
    /// Chroma floor at which the search gives up
    pub min_chroma: f64,
    /// Tolerance band around 0..=255 per channel
    pub tolerance: f64,
}

/// Outcome of one gamut-mapping search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutClamp {
    /// The (possibly chroma-reduced) colour
    pub color: Oklch,
    /// Number of chroma reductions applied
    pub iterations: u32,
    /// Whether `color` lies inside the tolerance band
    pub in_gamut: bool,
}

impl Default for GamutMapper {
    fn default() -> Self {
        Self {
            factor: CHROMA_REDUCTION_FACTOR,
            max_iterations: MAX_ITERATIONS,
            min_chroma: MIN_CHROMA,
            tolerance: GAMUT_TOLERANCE,
        }
    }
}

impl GamutMapper {
    /// Whether a colour's unrounded sRGB channels fit the tolerance band.
    pub fn fits(&self, color: Oklch) -> bool {
        color.to_srgb().fits_gamut(self.tolerance)
    }

    /// Reduce chroma until the colour fits, the iteration cap is reached, or
    /// chroma drops to the floor, whichever comes first.
    ///
    /// On non-convergence the most reduced candidate is returned with
    /// `in_gamut == false`; its channels are clamped when converted to
    /// [`Rgb8`](crate::Rgb8).
    pub fn clamp(&self, color: Oklch) -> GamutClamp {
        let mut candidate = color;
        let mut iterations = 0;

        while iterations < self.max_iterations && candidate.c > self.min_chroma {
            if self.fits(candidate) {
                return GamutClamp {
                    color: candidate,
                    iterations,
                    in_gamut: true,
                };
            }
            candidate = candidate.scale_chroma(self.factor);
            iterations += 1;
        }

        GamutClamp {
            color: candidate,
            iterations,
            in_gamut: self.fits(candidate),
        }
    }
}

/// Map a colour into sRGB with the default [`GamutMapper`].
pub fn clamp_to_gamut(color: Oklch) -> Oklch {
    GamutMapper::default().clamp(color).color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb8;

    #[test]
    fn test_in_gamut_color_is_untouched() {
        let orange = Oklch::from(Rgb8::new(255, 68, 0));
        let result = GamutMapper::default().clamp(orange);
        assert_eq!(result.color, orange);
        assert_eq!(result.iterations, 0);
        assert!(result.in_gamut);
    }

    #[test]
    fn test_out_of_gamut_converges() {
        let vivid = Oklch::new(0.9, 0.4, 30.0);
        let result = GamutMapper::default().clamp(vivid);

        assert!(result.iterations <= MAX_ITERATIONS);
        assert!(result.iterations > 0);
        assert!(result.in_gamut, "expected convergence: {result:?}");
        assert!(result.color.c < vivid.c);
        assert_eq!(result.color.l, vivid.l);
        assert_eq!(result.color.h, vivid.h);
    }

    #[test]
    fn test_chroma_follows_geometric_schedule() {
        let vivid = Oklch::new(0.9, 0.4, 30.0);
        let result = GamutMapper::default().clamp(vivid);
        let expected = 0.4 * CHROMA_REDUCTION_FACTOR.powi(result.iterations as i32);
        assert!((result.color.c - expected).abs() < 1e-12);
    }

    #[test]
    fn test_stops_at_first_fitting_candidate() {
        let vivid = Oklch::new(0.7, 0.35, 200.0);
        let mapper = GamutMapper::default();
        let result = mapper.clamp(vivid);
        assert!(result.in_gamut);
        assert!(result.iterations > 0);

        // One reduction fewer must still be outside the band
        let previous =
            vivid.scale_chroma(CHROMA_REDUCTION_FACTOR.powi(result.iterations as i32 - 1));
        assert!(!mapper.fits(previous));
    }

    #[test]
    fn test_iteration_cap_returns_last_candidate() {
        let mapper = GamutMapper {
            max_iterations: 3,
            ..GamutMapper::default()
        };
        let vivid = Oklch::new(0.9, 0.4, 30.0);
        let result = mapper.clamp(vivid);

        assert_eq!(result.iterations, 3);
        assert!(!result.in_gamut);
        assert!((result.color.c - 0.4 * 0.95_f64.powi(3)).abs() < 1e-12);
    }

    #[test]
    fn test_negligible_chroma_skips_search() {
        let near_gray = Oklch::new(0.5, 0.0005, 120.0);
        let result = GamutMapper::default().clamp(near_gray);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.color, near_gray);
    }

    #[test]
    fn test_extreme_lightness_hits_iteration_cap() {
        // Lightness outside 0..=1 can never fit; the cap must stop the search
        for l in [1.2, -0.1] {
            let result = GamutMapper::default().clamp(Oklch::new(l, 0.3, 270.0));
            assert_eq!(result.iterations, MAX_ITERATIONS);
            assert!(!result.in_gamut);
            assert_eq!(result.color.l, l);
        }
    }

    #[test]
    fn test_clamp_to_gamut_matches_default_mapper() {
        let vivid = Oklch::new(0.5, 0.5, 140.0);
        assert_eq!(clamp_to_gamut(vivid), GamutMapper::default().clamp(vivid).color);
    }
}
