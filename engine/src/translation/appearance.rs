use super::ranges::{self, FieldRange};
use crate::schema::{ButtonStyle, CanvasState};
use serde::{Deserialize, Serialize};

/// The part of the host `AppearanceConfig` the canvas drives.
///
/// Serializes with the host's own key names, so it can be deep-merged straight into the host
/// configuration. Every numeric field is already clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceFragment {
    pub typography: TypographyFragment,
    pub styling: StylingFragment,
    pub buttons: ButtonsFragment,
    pub liquid_glass: LiquidGlassFragment,
    pub text_diffusion: TextDiffusionFragment,
    pub animations: AnimationsFragment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyFragment {
    pub font_family: String,
    pub font_size_scale: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylingFragment {
    pub radius: f64,
    pub glass_intensity: f64,
    pub opacity: f64,
    pub noise_opacity: f64,
    pub chromatic_aberration: f64,
    pub glow_intensity: f64,
    pub refraction: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonsFragment {
    pub style: ButtonStyle,
    pub radius: f64,
    pub glow: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiquidGlassFragment {
    pub displacement_scale: f64,
    pub blur_amount: f64,
    pub elasticity: f64,
    pub aberration_intensity: f64,
    #[serde(rename = "applyToUI")]
    pub apply_to_ui: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextDiffusionFragment {
    pub blur: f64,
    pub opacity: f64,
    pub glow_strength: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationsFragment {
    pub hover: bool,
    pub click: bool,
    pub micro: bool,
    pub transition_duration: f64,
}

fn px_to_rem(px: f64, range: FieldRange) -> f64 {
    range.clamp(px / ranges::ROOT_FONT_PX)
}

/// Projects the canvas document onto the host appearance fields it controls.
///
/// Editor-only fields have no host slot and are dropped.
pub fn to_appearance_config(state: &CanvasState) -> AppearanceFragment {
    let typography = &state.typography;
    let effects = &state.effects;
    let components = &state.components;

    let button_radius = if components.button_radius <= ranges::PILL_THRESHOLD_PX {
        px_to_rem(components.button_radius, ranges::BUTTON_RADIUS)
    } else {
        ranges::BUTTON_RADIUS.max
    };

    AppearanceFragment {
        typography: TypographyFragment {
            font_family: typography.font_main.clone(),
            font_size_scale: ranges::FONT_SIZE_SCALE
                .clamp(typography.base_size / ranges::ROOT_FONT_PX),
        },
        styling: StylingFragment {
            radius: px_to_rem(state.geometry.radius_md, ranges::RADIUS),
            glass_intensity: ranges::GLASS_INTENSITY.clamp(effects.backdrop_blur),
            opacity: ranges::OPACITY.clamp(effects.glass_saturation / ranges::SATURATION_DIVISOR),
            noise_opacity: ranges::NOISE_OPACITY.clamp(effects.noise_opacity),
            chromatic_aberration: ranges::CHROMATIC_ABERRATION.clamp(effects.chromatic_aberration),
            glow_intensity: ranges::GLOW_INTENSITY.clamp(effects.glow_intensity),
            refraction: ranges::REFRACTION.clamp(effects.refraction_index - 1.0),
        },
        buttons: ButtonsFragment {
            style: components.button_style,
            radius: button_radius,
            glow: components.button_glow,
        },
        liquid_glass: LiquidGlassFragment {
            displacement_scale: ranges::DISPLACEMENT_SCALE.clamp(effects.displacement_scale),
            blur_amount: ranges::BLUR_AMOUNT.clamp(effects.blur_amount),
            elasticity: ranges::ELASTICITY.clamp(effects.elasticity),
            aberration_intensity: ranges::ABERRATION_INTENSITY.clamp(effects.chromatic_aberration),
            apply_to_ui: effects.backdrop_blur > ranges::LIQUID_UI_BLUR_THRESHOLD,
        },
        text_diffusion: TextDiffusionFragment {
            blur: ranges::DIFFUSION_BLUR.clamp(effects.text_diffusion_blur),
            opacity: ranges::DIFFUSION_OPACITY.clamp(effects.text_diffusion_opacity),
            glow_strength: ranges::DIFFUSION_GLOW.clamp(effects.text_diffusion_glow),
        },
        animations: AnimationsFragment {
            hover: components.animate_hover,
            click: components.animate_click,
            micro: components.micro_interactions,
            transition_duration: ranges::TRANSITION_DURATION.clamp(components.transition_speed),
        },
    }
}
