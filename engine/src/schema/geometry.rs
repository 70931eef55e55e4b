use super::macros::{keyword_enum, section};

section! {
    /// Corner radii and layout dimensions, in pixels unless noted.
    pub struct Geometry / GeometryPatch {
        radius_sm: f64 = 4.0,
        radius_md: f64 = 8.0,
        radius_lg: f64 = 16.0,
        radius_xl: f64 = 24.0,
        radius_pill: f64 = 9999.0,
        radius_buttons: f64 = 12.0,
        radius_inputs: f64 = 8.0,
        radius_widgets: f64 = 20.0,
        radius_windows: f64 = 24.0,
        radius_tabs: f64 = 8.0,
        radius_badges: f64 = 20.0,
        radius_dropdowns: f64 = 12.0,
        golden_ratio: f64 = 1.618,
        dock_margin: f64 = 20.0,
        dock_magnification: f64 = 1.2,
        dock_icon_size: f64 = 24.0,
        window_title_bar_height: f64 = 32.0,
        tab_curvature: f64 = 8.0,
        panel_blur: f64 = 20.0,
        spacing_scale: f64 = 1.0,
        content_max_width: f64 = 1200.0,
        grid_columns: u32 = 12,
        border_width: f64 = 1.0,
    }
}

keyword_enum! {
    pub enum ModalPosition {
        Center => "center",
        Top => "top",
        Bottom => "bottom",
    }
    default Center
}

keyword_enum! {
    pub enum Placement {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
    default Top
}

keyword_enum! {
    pub enum Density {
        Comfortable => "comfortable",
        Compact => "compact",
        Spacious => "spacious",
    }
    default Comfortable
}

keyword_enum! {
    pub enum ZIndexLayering {
        Standard => "standard",
        Flat => "flat",
        Deep => "deep",
    }
    default Standard
}

keyword_enum! {
    pub enum ContainerFlex {
        Fluid => "fluid",
        Fixed => "fixed",
        Elastic => "elastic",
    }
    default Fluid
}

section! {
    pub struct GridSystem / GridSystemPatch {
        columns: u32 = 12,
        gap: f64 = 24.0,
        visible: bool = true,
        gutter: f64 = 16.0,
        max_width: f64 = 1440.0,
    }
}

section! {
    pub struct Positioning / PositioningPatch {
        modal_position: ModalPosition = ModalPosition::Center,
        popover_offset: f64 = 8.0,
        tooltip_placement: Placement = Placement::Top,
        density: Density = Density::Comfortable,
        z_index_layering: ZIndexLayering = ZIndexLayering::Standard,
        grid_system: GridSystem = GridSystem::default(),
        container_flex: ContainerFlex = ContainerFlex::Fluid,
    }
}
