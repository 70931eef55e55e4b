use crate::schema::ButtonStyle;
use crate::schema::macros::keyword_enum;
use serde::{Deserialize, Serialize};

keyword_enum! {
    pub enum MenuPosition {
        Left => "left",
        Top => "top",
        Right => "right",
        Bottom => "bottom",
    }
    default Left
}

keyword_enum! {
    pub enum MenuStyle {
        Sidebar => "sidebar",
        Dock => "dock",
        Minimal => "minimal",
    }
    default Sidebar
}

keyword_enum! {
    pub enum MenuIconStyle {
        Outline => "outline",
        Solid => "solid",
        Thin => "thin",
    }
    default Outline
}

keyword_enum! {
    pub enum HostBackgroundKind {
        Solid => "solid",
        Gradient => "gradient",
        Image => "image",
        Video => "video",
    }
    default Solid
}

keyword_enum! {
    pub enum BackgroundAnimation {
        None => "none",
        Pan => "pan",
        Zoom => "zoom",
        Pulse => "pulse",
        Scroll => "scroll",
    }
    default None
}

/// Configuration the host application persists for itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceConfig {
    pub typography: HostTypography,
    pub layout: HostLayout,
    pub styling: HostStyling,
    pub background: HostBackground,
    pub buttons: HostButtons,
    pub liquid_glass: HostLiquidGlass,
    pub text_diffusion: HostTextDiffusion,
    pub animations: HostAnimations,
    pub theme_store: ThemeStoreState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostTypography {
    pub font_family: String,
    pub font_size_scale: f64,
}

impl Default for HostTypography {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            font_size_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostLayout {
    pub menu_position: MenuPosition,
    pub menu_style: MenuStyle,
    pub icon_style: MenuIconStyle,
}

/// `radius` is in rem, `glass_intensity` in pixels of blur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostStyling {
    pub radius: f64,
    pub glass_intensity: f64,
    pub opacity: f64,
    pub noise_opacity: f64,
    pub chromatic_aberration: f64,
    pub glow_intensity: f64,
    pub refraction: f64,
}

impl Default for HostStyling {
    fn default() -> Self {
        Self {
            radius: 0.5,
            glass_intensity: 10.0,
            opacity: 0.8,
            noise_opacity: 0.05,
            chromatic_aberration: 0.0,
            glow_intensity: 0.5,
            refraction: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostBackground {
    #[serde(rename = "type")]
    pub kind: HostBackgroundKind,
    /// A URL for images and video, a CSS value otherwise.
    pub value: String,
    pub blur: f64,
    pub animation: BackgroundAnimation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostButtons {
    pub style: ButtonStyle,
    pub radius: f64,
    pub glow: bool,
}

impl Default for HostButtons {
    fn default() -> Self {
        Self {
            style: ButtonStyle::Default,
            radius: 0.5,
            glow: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostLiquidGlass {
    pub enabled: bool,
    #[serde(rename = "applyToUI")]
    pub apply_to_ui: bool,
    pub distort_width: f64,
    pub distort_height: f64,
    pub distort_radius: f64,
    pub smooth_step_edge: f64,
    pub distance_offset: f64,
    pub displacement_scale: f64,
    pub blur_amount: f64,
    pub elasticity: f64,
    pub aberration_intensity: f64,
}

impl Default for HostLiquidGlass {
    fn default() -> Self {
        Self {
            enabled: true,
            apply_to_ui: false,
            distort_width: 0.3,
            distort_height: 0.2,
            distort_radius: 0.6,
            smooth_step_edge: 0.8,
            distance_offset: 0.15,
            displacement_scale: 0.0,
            blur_amount: 0.0,
            elasticity: 0.0,
            aberration_intensity: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostTextDiffusion {
    pub blur: f64,
    pub opacity: f64,
    pub glow_strength: f64,
}

impl Default for HostTextDiffusion {
    fn default() -> Self {
        Self {
            blur: 0.0,
            opacity: 1.0,
            glow_strength: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostAnimations {
    pub hover: bool,
    pub click: bool,
    pub micro: bool,
    pub transition_duration: f64,
}

impl Default for HostAnimations {
    fn default() -> Self {
        Self {
            hover: true,
            click: true,
            micro: true,
            transition_duration: 300.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeStoreState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_template_id: Option<String>,
}
