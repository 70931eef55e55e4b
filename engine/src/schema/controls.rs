use super::macros::{keyword_enum, section};

keyword_enum! {
    pub enum DialogAnimation {
        Fade => "fade",
        Scale => "scale",
        Slide => "slide",
    }
    default Scale
}

keyword_enum! {
    pub enum CloseButtonStyle {
        X => "x",
        Pill => "pill",
        Icon => "icon",
    }
    default X
}

section! {
    pub struct Dialogs / DialogsPatch {
        overlay_opacity: f64 = 0.6,
        overlay_blur: f64 = 8.0,
        animation: DialogAnimation = DialogAnimation::Scale,
        close_button_style: CloseButtonStyle = CloseButtonStyle::X,
    }
}

keyword_enum! {
    pub enum TabStyle {
        Underline => "underline",
        Pill => "pill",
        Box => "box",
    }
    default Pill
}

section! {
    pub struct TabsConfig / TabsConfigPatch {
        style: TabStyle = TabStyle::Pill,
        active_color: String = "#8B5CF6".into(),
        spacing: f64 = 4.0,
    }
}

keyword_enum! {
    pub enum CheckboxStyle {
        Round => "round",
        Square => "square",
    }
    default Round
}

keyword_enum! {
    pub enum SwitchStyle {
        Standard => "standard",
        Cyber => "cyber",
        Fluid => "fluid",
    }
    default Standard
}

section! {
    pub struct Toggles / TogglesPatch {
        switch_track_color: String = "#8B5CF6".into(),
        checkbox_style: CheckboxStyle = CheckboxStyle::Round,
        radio_size: f64 = 16.0,
        switch_style: SwitchStyle = SwitchStyle::Standard,
    }
}

keyword_enum! {
    pub enum AvatarShape {
        Circle => "circle",
        Rounded => "rounded",
        Square => "square",
    }
    default Circle
}

keyword_enum! {
    pub enum StatusDotPosition {
        TopRight => "top-right",
        BottomRight => "bottom-right",
    }
    default BottomRight
}

section! {
    pub struct Avatars / AvatarsPatch {
        shape: AvatarShape = AvatarShape::Circle,
        size_scale: f64 = 1.0,
        status_dot_position: StatusDotPosition = StatusDotPosition::BottomRight,
    }
}

keyword_enum! {
    pub enum ProgressColorScheme {
        Primary => "primary",
        Gradient => "gradient",
        Rainbow => "rainbow",
    }
    default Primary
}

section! {
    pub struct ProgressBars / ProgressBarsPatch {
        height: f64 = 6.0,
        color_scheme: ProgressColorScheme = ProgressColorScheme::Primary,
        animated: bool = true,
    }
}

keyword_enum! {
    pub enum ToastPosition {
        TopRight => "top-right",
        TopCenter => "top-center",
        BottomRight => "bottom-right",
        BottomCenter => "bottom-center",
    }
    default BottomRight
}

keyword_enum! {
    pub enum ToastStyle {
        Glass => "glass",
        Solid => "solid",
        Minimal => "minimal",
        Neon => "neon",
        Cyber => "cyber",
        Blast => "blast",
    }
    default Glass
}

section! {
    /// Toast placement and timing. `duration` is in milliseconds.
    pub struct Toasts / ToastsPatch {
        position: ToastPosition = ToastPosition::BottomRight,
        duration: u64 = 4000,
        style: ToastStyle = ToastStyle::Glass,
        last_trigger: u64 = 0,
    }
}

keyword_enum! {
    pub enum DockStyle {
        Floating => "floating",
        Attached => "attached",
        Minimal => "minimal",
    }
    default Floating
}

keyword_enum! {
    pub enum BreadcrumbSeparator {
        Slash => "slash",
        Arrow => "arrow",
        Dot => "dot",
    }
    default Slash
}

impl BreadcrumbSeparator {
    pub fn glyph(&self) -> &'static str {
        match self {
            BreadcrumbSeparator::Slash => "/",
            BreadcrumbSeparator::Arrow => "›",
            BreadcrumbSeparator::Dot => "·",
        }
    }
}

section! {
    pub struct Nav / NavPatch {
        dock_style: DockStyle = DockStyle::Floating,
        breadcrumb_separator: BreadcrumbSeparator = BreadcrumbSeparator::Slash,
        menu_item_padding: f64 = 8.0,
    }
}

keyword_enum! {
    pub enum WindowStyle {
        Standard => "standard",
        Cyber => "cyber",
        Floating => "floating",
    }
    default Standard
}

keyword_enum! {
    pub enum FrameType {
        Minimal => "minimal",
        Thick => "thick",
        Glass => "glass",
    }
    default Glass
}

keyword_enum! {
    pub enum TabLayout {
        Top => "top",
        Side => "side",
        Bottom => "bottom",
    }
    default Top
}

section! {
    pub struct LayoutConfig / LayoutConfigPatch {
        window_style: WindowStyle = WindowStyle::Standard,
        frame_type: FrameType = FrameType::Glass,
        tab_layout: TabLayout = TabLayout::Top,
        window_padding: f64 = 16.0,
        window_blur: f64 = 20.0,
        show_title_bar: bool = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dashed_position_keywords() {
        assert_eq!(
            serde_json::to_value(ToastPosition::TopCenter).unwrap(),
            json!("top-center")
        );
        assert_eq!(StatusDotPosition::default().as_str(), "bottom-right");
    }

    #[test]
    fn breadcrumb_glyphs_are_distinct() {
        let glyphs: Vec<_> = BreadcrumbSeparator::ALL.iter().map(|s| s.glyph()).collect();
        assert_eq!(glyphs, vec!["/", "›", "·"]);
    }
}
