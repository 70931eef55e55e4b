//! Numeric bounds of every value handed to the host application.
//!
//! These constants are the only place the bounds are declared. Editor sliders should read
//! their limits from here too.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    /// Host field path, e.g. `styling.radius`.
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Clamps into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Pixels per rem on the host.
pub const ROOT_FONT_PX: f64 = 16.0;
/// Button radii above this many pixels are treated as a full pill.
pub const PILL_THRESHOLD_PX: f64 = 100.0;
/// Divisor converting editor glass saturation into host opacity.
pub const SATURATION_DIVISOR: f64 = 255.0;
/// Backdrop blur above which liquid glass is applied to the whole UI.
pub const LIQUID_UI_BLUR_THRESHOLD: f64 = 10.0;

pub const FONT_SIZE_SCALE: FieldRange = FieldRange::new("typography.fontSizeScale", 0.8, 1.2);
pub const RADIUS: FieldRange = FieldRange::new("styling.radius", 0.0, 1.5);
pub const GLASS_INTENSITY: FieldRange = FieldRange::new("styling.glassIntensity", 0.0, 60.0);
pub const OPACITY: FieldRange = FieldRange::new("styling.opacity", 0.2, 1.0);
pub const NOISE_OPACITY: FieldRange = FieldRange::new("styling.noiseOpacity", 0.0, 1.0);
pub const CHROMATIC_ABERRATION: FieldRange =
    FieldRange::new("styling.chromaticAberration", 0.0, 10.0);
pub const GLOW_INTENSITY: FieldRange = FieldRange::new("styling.glowIntensity", 0.0, 1.0);
pub const REFRACTION: FieldRange = FieldRange::new("styling.refraction", 0.0, 1.0);
pub const BUTTON_RADIUS: FieldRange = FieldRange::new("buttons.radius", 0.0, 1.5);
pub const DISPLACEMENT_SCALE: FieldRange =
    FieldRange::new("liquidGlass.displacementScale", 0.0, 200.0);
pub const BLUR_AMOUNT: FieldRange = FieldRange::new("liquidGlass.blurAmount", 0.0, 5.0);
pub const ELASTICITY: FieldRange = FieldRange::new("liquidGlass.elasticity", 0.0, 1.0);
pub const ABERRATION_INTENSITY: FieldRange =
    FieldRange::new("liquidGlass.aberrationIntensity", 0.0, 10.0);
pub const DIFFUSION_BLUR: FieldRange = FieldRange::new("textDiffusion.blur", 0.0, 20.0);
pub const DIFFUSION_OPACITY: FieldRange = FieldRange::new("textDiffusion.opacity", 0.0, 1.0);
pub const DIFFUSION_GLOW: FieldRange = FieldRange::new("textDiffusion.glowStrength", 0.0, 2.0);
pub const TRANSITION_DURATION: FieldRange =
    FieldRange::new("animations.transitionDuration", 50.0, 500.0);

pub const ALL: &[FieldRange] = &[
    FONT_SIZE_SCALE,
    RADIUS,
    GLASS_INTENSITY,
    OPACITY,
    NOISE_OPACITY,
    CHROMATIC_ABERRATION,
    GLOW_INTENSITY,
    REFRACTION,
    BUTTON_RADIUS,
    DISPLACEMENT_SCALE,
    BLUR_AMOUNT,
    ELASTICITY,
    ABERRATION_INTENSITY,
    DIFFUSION_BLUR,
    DIFFUSION_OPACITY,
    DIFFUSION_GLOW,
    TRANSITION_DURATION,
];

pub fn range_for(field: &str) -> Option<FieldRange> {
    ALL.iter().copied().find(|range| range.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn nan_and_infinities_land_on_bounds() {
        assert_eq!(OPACITY.clamp(f64::NAN), 0.2);
        assert_eq!(GLASS_INTENSITY.clamp(f64::INFINITY), 60.0);
        assert_eq!(GLASS_INTENSITY.clamp(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn field_names_are_unique_and_well_formed() {
        for (i, range) in ALL.iter().enumerate() {
            assert!(range.min < range.max, "{} is empty", range.field);
            assert!(range.field.contains('.'));
            assert!(ALL[i + 1..].iter().all(|other| other.field != range.field));
        }
    }

    #[test]
    fn lookup_by_field() {
        assert_some_eq!(range_for("styling.radius"), RADIUS);
        assert_none!(range_for("styling.nope"));
    }
}
