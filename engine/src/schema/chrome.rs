//! Iconography, widget chrome, backgrounds and secondary surface details.

use super::macros::{keyword_enum, section};
use serde::{Deserialize, Serialize};

keyword_enum! {
    pub enum IconStyle {
        Stroke => "stroke",
        Solid => "solid",
    }
    default Stroke
}

keyword_enum! {
    pub enum IconAnimation {
        None => "none",
        Pulse => "pulse",
        Bounce => "bounce",
        Spin => "spin",
    }
    default None
}

keyword_enum! {
    pub enum IconCollection {
        Lucide => "lucide",
        Custom => "custom",
        AiGenerated => "ai-generated",
        StitchLiquid => "stitch-liquid",
        StitchOrganic => "stitch-organic",
    }
    default Lucide
}

keyword_enum! {
    pub enum NavigationIcons {
        Default => "default",
        Minimal => "minimal",
        Filled => "filled",
    }
    default Default
}

keyword_enum! {
    pub enum WidgetIcons {
        Default => "default",
        Colorful => "colorful",
        Glass => "glass",
    }
    default Default
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomIcon {
    pub name: String,
    pub svg: String,
}

section! {
    pub struct Iconography / IconographyPatch {
        style: IconStyle = IconStyle::Stroke,
        stroke_width: f64 = 2.0,
        scale: f64 = 1.0,
        animation: IconAnimation = IconAnimation::None,
        active_collection: IconCollection = IconCollection::Lucide,
        navigation_icons: NavigationIcons = NavigationIcons::Default,
        widget_icons: WidgetIcons = WidgetIcons::Default,
        custom_icons: Vec<CustomIcon> = Vec::new(),
    }
}

keyword_enum! {
    pub enum DashboardTemplate {
        Standard => "standard",
        Analyst => "analyst",
        Creative => "creative",
        Strategic => "strategic",
    }
    default Standard
}

keyword_enum! {
    pub enum WidgetBackground {
        Glass => "glass",
        Solid => "solid",
        Cyber => "cyber",
        Mesh => "mesh",
    }
    default Glass
}

keyword_enum! {
    pub enum WidgetBorder {
        None => "none",
        Thin => "thin",
        Glow => "glow",
        Neon => "neon",
    }
    default Thin
}

keyword_enum! {
    pub enum WidgetHeader {
        Simple => "simple",
        Accented => "accented",
        Underlined => "underlined",
    }
    default Simple
}

keyword_enum! {
    pub enum WidgetShadow {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Neon => "neon",
    }
    default Md
}

keyword_enum! {
    pub enum InnerGlow {
        None => "none",
        Subtle => "subtle",
        Strong => "strong",
    }
    default None
}

keyword_enum! {
    pub enum GraphType {
        Bar => "bar",
        Line => "line",
        Radar => "radar",
        Dot => "dot",
    }
    default Line
}

section! {
    pub struct Widgets / WidgetsPatch {
        dashboard_template: DashboardTemplate = DashboardTemplate::Standard,
        bg_style: WidgetBackground = WidgetBackground::Glass,
        border_style: WidgetBorder = WidgetBorder::Thin,
        header_style: WidgetHeader = WidgetHeader::Simple,
        shadows: WidgetShadow = WidgetShadow::Md,
        glass_opacity: f64 = 0.05,
        noise_texture: bool = true,
        corner_smoothing: f64 = 0.2,
        inner_glow: InnerGlow = InnerGlow::None,
        reflection: f64 = 0.5,
        ashost_graph_type: GraphType = GraphType::Line,
        ashost_color: String = "#8B5CF6".into(),
        ashost_speed: f64 = 1.0,
    }
}

keyword_enum! {
    pub enum BackgroundKind {
        Solid => "solid",
        Gradient => "gradient",
        Mesh => "mesh",
        Image => "image",
        Video => "video",
    }
    default Gradient
}

keyword_enum! {
    pub enum BackgroundPattern {
        None => "none",
        Grid => "grid",
        Dots => "dots",
        Noise => "noise",
    }
    default None
}

keyword_enum! {
    pub enum BlendMode {
        Normal => "normal",
        Overlay => "overlay",
        Multiply => "multiply",
        Screen => "screen",
    }
    default Normal
}

section! {
    /// Application background. `mesh_colors` always holds exactly four stops.
    pub struct Backgrounds / BackgroundsPatch {
        #[serde(rename = "type")]
        kind: BackgroundKind = BackgroundKind::Gradient,
        pattern: BackgroundPattern = BackgroundPattern::None,
        opacity: f64 = 1.0,
        blur: f64 = 0.0,
        mesh_colors: [String; 4] = [
            "#8B5CF6".into(),
            "#3B82F6".into(),
            "#EC4899".into(),
            "#10B981".into(),
        ],
        mesh_speed: f64 = 0.5,
        video_url: String = String::new(),
        blending_mode: BlendMode = BlendMode::Normal,
        noise_intensity: f64 = 0.05,
        pattern_opacity: Option<f64> = None,
        pattern_scale: Option<f64> = None,
    }
}

keyword_enum! {
    pub enum ScrollbarStyle {
        Thin => "thin",
    }
    default Thin
}

keyword_enum! {
    pub enum SelectionMode {
        Precise => "precise",
        Block => "block",
    }
    default Block
}

keyword_enum! {
    pub enum CursorStyle {
        Default => "default",
        Custom => "custom",
        Glow => "glow",
    }
    default Default
}

keyword_enum! {
    pub enum DividerStyle {
        None => "none",
        Line => "line",
        Gradient => "gradient",
    }
    default Line
}

keyword_enum! {
    pub enum MaskShape {
        None => "none",
        Hex => "hex",
        Circle => "circle",
    }
    default None
}

/// Keyword that defers the selection color to the host's own default.
pub const AUTO_SELECTION_COLOR: &str = "auto";

section! {
    pub struct Secondary / SecondaryPatch {
        scrollbars: ScrollbarStyle = ScrollbarStyle::Thin,
        selection_color: String = "#8B5CF6".into(),
        selection_mode: SelectionMode = SelectionMode::Block,
        cursor: CursorStyle = CursorStyle::Default,
        dividers: DividerStyle = DividerStyle::Line,
        custom_cursor_svg: String = String::new(),
        mask: MaskShape = MaskShape::None,
    }
}

impl Secondary {
    pub fn selection_is_auto(&self) -> bool {
        self.selection_color.eq_ignore_ascii_case(AUTO_SELECTION_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mesh_colors_require_exactly_four_stops() {
        let three: Result<BackgroundsPatch, _> =
            serde_json::from_value(json!({ "meshColors": ["#000", "#111", "#222"] }));
        assert!(three.is_err());

        let four: BackgroundsPatch =
            serde_json::from_value(json!({ "meshColors": ["#000", "#111", "#222", "#333"] }))
                .unwrap();
        assert_eq!(four.mesh_colors.unwrap()[3], "#333");
    }

    #[test]
    fn optional_pattern_fields_accept_null() {
        let backgrounds: Backgrounds =
            serde_json::from_value(json!({ "patternOpacity": null, "patternScale": 2 })).unwrap();
        assert_eq!(backgrounds.pattern_opacity, None);
        assert_eq!(backgrounds.pattern_scale, Some(2.0));
    }

    #[test]
    fn auto_selection_is_case_insensitive() {
        let mut secondary = Secondary::default();
        assert!(!secondary.selection_is_auto());
        secondary.selection_color = "AUTO".to_string();
        assert!(secondary.selection_is_auto());
    }
}
