use super::actions::CanvasAction;
use crate::schema::CanvasState;

/// Applies `action` to `state` and returns the next state.
///
/// Pure and total: no I/O, no clamping, no validation. Payload checks happen where the action
/// is built.
pub fn reduce(mut state: CanvasState, action: CanvasAction) -> CanvasState {
    match action {
        CanvasAction::SetPalette(patch) => state.palette.merge(patch),
        CanvasAction::SetTrinityAxis(patch) => state.palette.trinity.merge_axis(patch),
        CanvasAction::SetTypography(patch) => state.typography.merge(patch),
        CanvasAction::SetComponents(patch) => state.components.merge(patch),
        CanvasAction::SetEffects(patch) => state.effects.merge(patch),
        CanvasAction::SetEnvironment(patch) => state.environment.merge(patch),
        CanvasAction::SetGeometry(patch) => state.geometry.merge(patch),
        CanvasAction::SetShadows(patch) => state.shadows.merge(patch),
        CanvasAction::SetIconography(patch) => state.iconography.merge(patch),
        CanvasAction::SetPositioning(patch) => state.positioning.merge(patch),
        CanvasAction::SetWidgets(patch) => state.widgets.merge(patch),
        CanvasAction::SetBackgrounds(patch) => state.backgrounds.merge(patch),
        CanvasAction::SetSecondary(patch) => state.secondary.merge(patch),
        CanvasAction::SetAiConfig(patch) => state.ai_config.merge(patch),
        CanvasAction::SetDialogs(patch) => state.dialogs.merge(patch),
        CanvasAction::SetTabsConfig(patch) => state.tabs_config.merge(patch),
        CanvasAction::SetToggles(patch) => state.toggles.merge(patch),
        CanvasAction::SetAvatars(patch) => state.avatars.merge(patch),
        CanvasAction::SetProgressBars(patch) => state.progress_bars.merge(patch),
        CanvasAction::SetToasts(patch) => state.toasts.merge(patch),
        CanvasAction::SetNav(patch) => state.nav.merge(patch),
        CanvasAction::SetUi(patch) => state.ui.merge(patch),
        CanvasAction::SetLayoutConfig(patch) => state.layout_config.merge(patch),
        CanvasAction::SetStitchCode { code, screen_id } => {
            state.stitch_code = code;
            state.stitch_screen_id = screen_id.unwrap_or_default();
        }
        CanvasAction::LoadState(next) => return *next,
        CanvasAction::Reset => return CanvasState::default(),
    }
    state
}
