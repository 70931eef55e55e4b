use super::macros::{keyword_enum, section};

keyword_enum! {
    pub enum ShadowPreset {
        Soft => "soft",
        Medium => "medium",
        Dramatic => "dramatic",
    }
    default Soft
}

keyword_enum! {
    pub enum GlassMode {
        Standard => "standard",
        Polar => "polar",
        Prominent => "prominent",
        Shader => "shader",
    }
    default Standard
}

keyword_enum! {
    pub enum EnvironmentKind {
        Orbs => "orbs",
        Grid => "grid",
        Abstract => "abstract",
    }
    default Orbs
}

section! {
    /// Glass, blur and distortion parameters. Values are raw editor units, unclamped.
    pub struct Effects / EffectsPatch {
        backdrop_blur: f64 = 12.0,
        glass_saturation: f64 = 1.2,
        glow_intensity: f64 = 0.8,
        noise_opacity: f64 = 0.05,
        refraction_index: f64 = 1.05,
        chromatic_aberration: f64 = 0.2,
        displacement_scale: f64 = 0.3,
        blur_amount: f64 = 0.5,
        elasticity: f64 = 0.4,
        scanline_opacity: f64 = 0.1,
        text_diffusion_blur: f64 = 0.4,
        text_diffusion_glow: f64 = 0.3,
        text_diffusion_opacity: f64 = 0.6,
        #[serde(rename = "liquidGlassUI")]
        liquid_glass_ui: bool = true,
        parallax_depth: f64 = 0.5,
        gradient_angle: f64 = 135.0,
        shadow_preset: ShadowPreset = ShadowPreset::Soft,
        mode: GlassMode = GlassMode::Standard,
        over_light: bool = true,
        corner_radius: f64 = 16.0,
        padding: String = "1rem".into(),
    }
}

section! {
    pub struct Environment / EnvironmentPatch {
        show: bool = true,
        #[serde(rename = "type")]
        kind: EnvironmentKind = EnvironmentKind::Orbs,
        intensity: f64 = 0.5,
    }
}

section! {
    /// CSS box-shadow values, stored verbatim.
    pub struct Shadows / ShadowsPatch {
        sm: String = "0 1px 2px 0 rgba(0, 0, 0, 0.05)".into(),
        md: String = "0 4px 6px -1px rgba(0, 0, 0, 0.1)".into(),
        lg: String = "0 10px 15px -3px rgba(0, 0, 0, 0.1)".into(),
        glow_primary: String = "0 0 20px rgba(139, 92, 246, 0.2)".into(),
    }
}
