use super::port::StylePort;
use crate::schema::CanvasState;
use crate::schema::chrome::BackgroundPattern;
use crate::schema::controls::{AvatarShape, CheckboxStyle};
use crate::store::StateObserver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssValue {
    Set(String),
    /// The property must not be set; the host falls back to its own default.
    Remove,
}

impl CssValue {
    pub fn as_set(&self) -> Option<&str> {
        match self {
            CssValue::Set(value) => Some(value),
            CssValue::Remove => None,
        }
    }
}

/// Ordered set of custom properties derived from one canvas state.
///
/// The list of names is the same for every state; only values differ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssProperties {
    entries: Vec<(&'static str, CssValue)>,
}

impl CssProperties {
    fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.entries.push((name, CssValue::Set(value.into())));
    }

    fn set_or_remove(&mut self, name: &'static str, value: Option<String>) {
        let value = value.map_or(CssValue::Remove, CssValue::Set);
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&CssValue> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CssValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

fn ms(value: impl std::fmt::Display) -> String {
    format!("{value}ms")
}

fn num(value: impl std::fmt::Display) -> String {
    value.to_string()
}

/// Ratio as a percentage, rounded to two decimals so float noise never reaches the host.
fn percent(ratio: f64) -> String {
    format!("{}%", (ratio * 10_000.0).round() / 100.0)
}

/// Projects every visual field of the canvas onto a CSS custom property.
///
/// Values are not clamped here.
pub fn to_css_properties(state: &CanvasState) -> CssProperties {
    let mut css = CssProperties::default();

    let palette = &state.palette;
    css.set("--color-primary", &palette.primary);
    css.set("--color-secondary", &palette.secondary);
    css.set("--color-accent", &palette.accent);
    css.set("--color-background", &palette.background);
    css.set("--color-surface", &palette.surface);
    css.set("--color-text-primary", &palette.text_primary);
    css.set("--color-text-secondary", &palette.text_secondary);
    css.set("--color-glass-border", &palette.glass_border);

    let trinity = &palette.trinity;
    css.set("--trinity-zenith", &trinity.zenith.active);
    css.set("--trinity-zenith-glow", &trinity.zenith.glow);
    css.set("--trinity-horizonte", &trinity.horizonte.active);
    css.set("--trinity-horizonte-panel", &trinity.horizonte.panel);
    css.set("--trinity-nucleo", &trinity.nucleo.active);
    css.set("--trinity-nucleo-panel", &trinity.nucleo.panel);
    css.set("--trinity-base", &trinity.base.active);
    css.set("--trinity-base-neutral", &trinity.base.neutral);

    let typography = &state.typography;
    css.set("--font-main", &typography.font_main);
    css.set("--font-headline", &typography.font_headline);
    css.set("--font-code", &typography.font_code);
    css.set("--font-size-base", px(typography.base_size));
    css.set("--font-scale-ratio", num(typography.scale_ratio));
    css.set("--font-weight-header", num(typography.header_weight));
    css.set("--font-weight-body", num(typography.body_weight));
    css.set("--tracking-header", format!("{}em", typography.header_tracking));
    css.set("--tracking-body", format!("{}em", typography.body_tracking));

    let components = &state.components;
    let geometry = &state.geometry;
    css.set("--btn-style", components.button_style.as_str());
    css.set("--btn-radius", px(components.button_radius));
    css.set(
        "--btn-glow",
        if components.button_glow {
            format!("0 0 20px {}44", palette.primary)
        } else {
            "none".to_string()
        },
    );
    css.set("--card-preset", components.card_preset.as_str());
    css.set("--card-radius", px(geometry.radius_lg));
    css.set("--card-bg", &palette.surface);
    css.set("--card-border", &palette.glass_border);
    css.set("--card-shadow", &state.shadows.md);
    css.set("--input-radius", px(geometry.radius_md));
    css.set("--input-border-style", components.input_border_style.as_str());
    css.set("--focus-ring-color", &components.focus_ring_color);
    css.set("--tooltip-style", components.tooltip_style.as_str());
    css.set("--badge-style", components.badge_style.as_str());
    css.set("--transition-speed", ms(components.transition_speed));

    let effects = &state.effects;
    css.set("--backdrop-blur", px(effects.backdrop_blur));
    css.set("--glass-saturation", percent(effects.glass_saturation));
    css.set("--glow-intensity", num(effects.glow_intensity));
    css.set("--noise-opacity", num(effects.noise_opacity));
    css.set("--refraction-index", num(effects.refraction_index));
    css.set("--chromatic-aberration", px(effects.chromatic_aberration));
    css.set("--displacement-scale", px(effects.displacement_scale));
    css.set("--blur-amount", num(effects.blur_amount));
    css.set("--elasticity", num(effects.elasticity));
    css.set("--scanline-opacity", num(effects.scanline_opacity));
    css.set("--text-diffusion-blur", px(effects.text_diffusion_blur));
    css.set("--text-diffusion-glow", num(effects.text_diffusion_glow));
    css.set("--text-diffusion-opacity", num(effects.text_diffusion_opacity));
    css.set("--liquid-glass-ui", if effects.liquid_glass_ui { "1" } else { "0" });
    css.set("--parallax-depth", num(effects.parallax_depth));
    css.set("--gradient-angle", format!("{}deg", effects.gradient_angle));
    css.set("--shadow-preset", effects.shadow_preset.as_str());
    css.set("--glass-mode", effects.mode.as_str());
    css.set("--glass-over-light", if effects.over_light { "1" } else { "0" });
    css.set("--glass-corner-radius", px(effects.corner_radius));
    css.set("--glass-padding", &effects.padding);

    let environment = &state.environment;
    css.set(
        "--environment-display",
        if environment.show { "block" } else { "none" },
    );
    css.set("--environment-type", environment.kind.as_str());
    css.set("--environment-intensity", num(environment.intensity));

    css.set("--radius-sm", px(geometry.radius_sm));
    css.set("--radius-md", px(geometry.radius_md));
    css.set("--radius-lg", px(geometry.radius_lg));
    css.set("--radius-xl", px(geometry.radius_xl));
    css.set("--radius-pill", px(geometry.radius_pill));
    css.set("--radius-buttons", px(geometry.radius_buttons));
    css.set("--radius-inputs", px(geometry.radius_inputs));
    css.set("--radius-widgets", px(geometry.radius_widgets));
    css.set("--radius-windows", px(geometry.radius_windows));
    css.set("--radius-tabs", px(geometry.radius_tabs));
    css.set("--radius-badges", px(geometry.radius_badges));
    css.set("--radius-dropdowns", px(geometry.radius_dropdowns));
    css.set("--golden-ratio", num(geometry.golden_ratio));
    css.set("--dock-margin", px(geometry.dock_margin));
    css.set("--dock-magnification", num(geometry.dock_magnification));
    css.set("--dock-icon-size", px(geometry.dock_icon_size));
    css.set("--window-titlebar-height", px(geometry.window_title_bar_height));
    css.set("--tab-curvature", px(geometry.tab_curvature));
    css.set("--panel-blur", px(geometry.panel_blur));
    css.set("--spacing-scale", num(geometry.spacing_scale));
    css.set("--content-max-width", px(geometry.content_max_width));
    css.set("--grid-columns", num(geometry.grid_columns));
    css.set("--border-width", px(geometry.border_width));

    let shadows = &state.shadows;
    css.set("--shadow-sm", &shadows.sm);
    css.set("--shadow-md", &shadows.md);
    css.set("--shadow-lg", &shadows.lg);
    css.set("--shadow-glow-primary", &shadows.glow_primary);

    let icons = &state.iconography;
    css.set("--icon-style", icons.style.as_str());
    css.set("--icon-stroke-width", num(icons.stroke_width));
    css.set("--icon-scale", num(icons.scale));
    css.set("--icon-animation", icons.animation.as_str());

    let positioning = &state.positioning;
    let grid = &positioning.grid_system;
    css.set("--modal-position", positioning.modal_position.as_str());
    css.set("--popover-offset", px(positioning.popover_offset));
    css.set("--tooltip-placement", positioning.tooltip_placement.as_str());
    css.set("--density", positioning.density.as_str());
    css.set("--z-layering", positioning.z_index_layering.as_str());
    css.set("--container-flex", positioning.container_flex.as_str());
    css.set("--grid-system-columns", num(grid.columns));
    css.set("--grid-gap", px(grid.gap));
    css.set("--grid-gutter", px(grid.gutter));
    css.set("--grid-max-width", px(grid.max_width));
    css.set("--grid-overlay", if grid.visible { "visible" } else { "hidden" });

    let widgets = &state.widgets;
    css.set("--widget-bg-style", widgets.bg_style.as_str());
    css.set("--widget-border-style", widgets.border_style.as_str());
    css.set("--widget-header-style", widgets.header_style.as_str());
    css.set("--widget-shadow", widgets.shadows.as_str());
    css.set("--widget-glass-opacity", num(widgets.glass_opacity));
    css.set("--widget-corner-smoothing", num(widgets.corner_smoothing));
    css.set("--widget-inner-glow", widgets.inner_glow.as_str());
    css.set("--widget-reflection", num(widgets.reflection));
    css.set("--ashost-color", &widgets.ashost_color);
    css.set("--ashost-speed", num(widgets.ashost_speed));

    let backgrounds = &state.backgrounds;
    css.set("--bg-type", backgrounds.kind.as_str());
    css.set("--bg-opacity", num(backgrounds.opacity));
    css.set("--bg-blur", px(backgrounds.blur));
    let [mesh_1, mesh_2, mesh_3, mesh_4] = &backgrounds.mesh_colors;
    css.set("--mesh-color-1", mesh_1);
    css.set("--mesh-color-2", mesh_2);
    css.set("--mesh-color-3", mesh_3);
    css.set("--mesh-color-4", mesh_4);
    css.set("--mesh-speed", num(backgrounds.mesh_speed));
    css.set("--bg-blend-mode", backgrounds.blending_mode.as_str());
    css.set("--bg-noise-intensity", num(backgrounds.noise_intensity));
    css.set("--bg-pattern", backgrounds.pattern.as_str());
    let pattern_visible = backgrounds.pattern != BackgroundPattern::None;
    css.set_or_remove(
        "--bg-pattern-opacity",
        backgrounds
            .pattern_opacity
            .filter(|_| pattern_visible)
            .map(num),
    );
    css.set_or_remove(
        "--bg-pattern-scale",
        backgrounds
            .pattern_scale
            .filter(|_| pattern_visible)
            .map(num),
    );
    css.set_or_remove(
        "--bg-video",
        Some(&backgrounds.video_url)
            .filter(|url| !url.is_empty())
            .map(|url| format!("url(\"{url}\")")),
    );

    let secondary = &state.secondary;
    css.set_or_remove(
        "--selection-color",
        (!secondary.selection_is_auto()).then(|| secondary.selection_color.clone()),
    );
    css.set("--selection-mode", secondary.selection_mode.as_str());
    css.set("--scrollbar-style", secondary.scrollbars.as_str());
    css.set("--cursor-style", secondary.cursor.as_str());
    css.set("--divider-style", secondary.dividers.as_str());
    css.set("--mask-shape", secondary.mask.as_str());

    let dialogs = &state.dialogs;
    css.set("--dialog-overlay-opacity", num(dialogs.overlay_opacity));
    css.set("--dialog-overlay-blur", px(dialogs.overlay_blur));
    css.set("--dialog-animation", dialogs.animation.as_str());
    css.set("--dialog-close-style", dialogs.close_button_style.as_str());

    let tabs = &state.tabs_config;
    css.set("--tab-style", tabs.style.as_str());
    css.set("--tab-active-color", &tabs.active_color);
    css.set("--tab-spacing", px(tabs.spacing));

    let toggles = &state.toggles;
    css.set("--switch-track-color", &toggles.switch_track_color);
    css.set("--switch-style", toggles.switch_style.as_str());
    css.set("--radio-size", px(toggles.radio_size));
    css.set(
        "--checkbox-radius",
        match toggles.checkbox_style {
            CheckboxStyle::Round => "50%",
            CheckboxStyle::Square => "4px",
        },
    );

    let avatars = &state.avatars;
    css.set(
        "--avatar-shape",
        match avatars.shape {
            AvatarShape::Circle => "9999px",
            AvatarShape::Rounded => "12px",
            AvatarShape::Square => "4px",
        },
    );
    css.set("--avatar-scale", num(avatars.size_scale));
    css.set("--avatar-status-position", avatars.status_dot_position.as_str());

    let progress = &state.progress_bars;
    css.set("--progress-height", px(progress.height));
    css.set("--progress-color-scheme", progress.color_scheme.as_str());
    css.set(
        "--progress-animation",
        if progress.animated { "running" } else { "paused" },
    );

    let toasts = &state.toasts;
    css.set("--toast-position", toasts.position.as_str());
    css.set("--toast-duration", ms(toasts.duration));
    css.set("--toast-style", toasts.style.as_str());

    let nav = &state.nav;
    css.set("--nav-dock-style", nav.dock_style.as_str());
    css.set("--nav-item-padding", px(nav.menu_item_padding));
    css.set(
        "--nav-breadcrumb-separator",
        format!("\"{}\"", nav.breadcrumb_separator.glyph()),
    );

    let layout = &state.layout_config;
    css.set("--window-style", layout.window_style.as_str());
    css.set("--window-frame", layout.frame_type.as_str());
    css.set("--tab-layout", layout.tab_layout.as_str());
    css.set("--window-padding", px(layout.window_padding));
    css.set("--window-blur", px(layout.window_blur));
    css.set(
        "--window-titlebar-display",
        if layout.show_title_bar { "flex" } else { "none" },
    );

    css
}

/// Pushes every entry to `port`. Removed entries are cleared so no stale value survives.
pub fn apply_css(properties: &CssProperties, port: &mut dyn StylePort) {
    for (name, value) in properties.iter() {
        match value {
            CssValue::Set(value) => port.set_property(name, value),
            CssValue::Remove => port.remove_property(name),
        }
    }
}

/// Store observer that re-derives and applies CSS on every change.
pub struct CssSync<P> {
    port: P,
}

impl<P: StylePort> CssSync<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    pub fn sync(&mut self, state: &CanvasState) {
        let properties = to_css_properties(state);
        apply_css(&properties, &mut self.port);
        log::trace!("Applied {} canvas style properties", properties.len());
    }
}

impl<P: StylePort + Send> StateObserver for CssSync<P> {
    fn state_changed(&mut self, state: &CanvasState) {
        self.sync(state);
    }
}
