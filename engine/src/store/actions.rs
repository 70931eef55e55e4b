use crate::error::{CanvasError, CanvasResult};
use crate::schema::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A single change to the canvas document.
///
/// Section variants carry a patch that is merged one level deep. The trinity axis variant
/// merges two levels: only the named axis is touched, and only its present roles.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasAction {
    SetPalette(PalettePatch),
    SetTrinityAxis(TrinityAxisPatch),
    SetTypography(TypographyPatch),
    SetComponents(ComponentsPatch),
    SetEffects(EffectsPatch),
    SetEnvironment(EnvironmentPatch),
    SetGeometry(GeometryPatch),
    SetShadows(ShadowsPatch),
    SetIconography(IconographyPatch),
    SetPositioning(PositioningPatch),
    SetWidgets(WidgetsPatch),
    SetBackgrounds(BackgroundsPatch),
    SetSecondary(SecondaryPatch),
    SetAiConfig(AiConfigPatch),
    SetDialogs(DialogsPatch),
    SetTabsConfig(TabsConfigPatch),
    SetToggles(TogglesPatch),
    SetAvatars(AvatarsPatch),
    SetProgressBars(ProgressBarsPatch),
    SetToasts(ToastsPatch),
    SetNav(NavPatch),
    SetUi(UiFlagsPatch),
    SetLayoutConfig(LayoutConfigPatch),
    SetStitchCode {
        code: String,
        screen_id: Option<String>,
    },
    LoadState(Box<CanvasState>),
    Reset,
}

/// Wire tag for each section key, used by untyped callers.
const SECTION_TAGS: &[(&str, &str)] = &[
    ("palette", "SET_PALETTE"),
    ("trinity", "SET_TRINITY"),
    ("typography", "SET_TYPOGRAPHY"),
    ("components", "SET_COMPONENTS"),
    ("effects", "SET_EFFECTS"),
    ("environment", "SET_ENVIRONMENT"),
    ("geometry", "SET_GEOMETRY"),
    ("shadows", "SET_SHADOWS"),
    ("iconography", "SET_ICONOGRAPHY"),
    ("positioning", "SET_POSITIONING"),
    ("widgets", "SET_WIDGETS"),
    ("backgrounds", "SET_BACKGROUNDS"),
    ("secondary", "SET_SECONDARY"),
    ("aiConfig", "SET_AI_CONFIG"),
    ("dialogs", "SET_DIALOGS"),
    ("tabsConfig", "SET_TABS_CONFIG"),
    ("toggles", "SET_TOGGLES"),
    ("avatars", "SET_AVATARS"),
    ("progressBars", "SET_PROGRESS"),
    ("toasts", "SET_TOASTS"),
    ("nav", "SET_NAV"),
    ("ui", "SET_UI"),
    ("layoutConfig", "SET_LAYOUT_CONFIG"),
];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StitchPayload {
    code: String,
    #[serde(default)]
    screen_id: Option<String>,
}

impl CanvasAction {
    pub fn tag(&self) -> &'static str {
        match self {
            CanvasAction::SetPalette(_) => "SET_PALETTE",
            CanvasAction::SetTrinityAxis(_) => "SET_TRINITY",
            CanvasAction::SetTypography(_) => "SET_TYPOGRAPHY",
            CanvasAction::SetComponents(_) => "SET_COMPONENTS",
            CanvasAction::SetEffects(_) => "SET_EFFECTS",
            CanvasAction::SetEnvironment(_) => "SET_ENVIRONMENT",
            CanvasAction::SetGeometry(_) => "SET_GEOMETRY",
            CanvasAction::SetShadows(_) => "SET_SHADOWS",
            CanvasAction::SetIconography(_) => "SET_ICONOGRAPHY",
            CanvasAction::SetPositioning(_) => "SET_POSITIONING",
            CanvasAction::SetWidgets(_) => "SET_WIDGETS",
            CanvasAction::SetBackgrounds(_) => "SET_BACKGROUNDS",
            CanvasAction::SetSecondary(_) => "SET_SECONDARY",
            CanvasAction::SetAiConfig(_) => "SET_AI_CONFIG",
            CanvasAction::SetDialogs(_) => "SET_DIALOGS",
            CanvasAction::SetTabsConfig(_) => "SET_TABS_CONFIG",
            CanvasAction::SetToggles(_) => "SET_TOGGLES",
            CanvasAction::SetAvatars(_) => "SET_AVATARS",
            CanvasAction::SetProgressBars(_) => "SET_PROGRESS",
            CanvasAction::SetToasts(_) => "SET_TOASTS",
            CanvasAction::SetNav(_) => "SET_NAV",
            CanvasAction::SetUi(_) => "SET_UI",
            CanvasAction::SetLayoutConfig(_) => "SET_LAYOUT_CONFIG",
            CanvasAction::SetStitchCode { .. } => "SET_STITCH_CODE",
            CanvasAction::LoadState(_) => "LOAD_STATE",
            CanvasAction::Reset => "RESET",
        }
    }

    /// Builds an action from a wire tag and its JSON payload.
    ///
    /// Returns `Ok(None)` for a tag this store does not know; callers treat that as a no-op.
    /// A known tag with a payload of the wrong shape is an error.
    pub fn from_tagged(tag: &str, payload: &Value) -> CanvasResult<Option<Self>> {
        let action = match tag {
            "SET_PALETTE" => CanvasAction::SetPalette(parse_payload(tag, payload)?),
            "SET_TRINITY" => CanvasAction::SetTrinityAxis(TrinityAxisPatch::from_keyed(payload)?),
            "SET_TYPOGRAPHY" => CanvasAction::SetTypography(parse_payload(tag, payload)?),
            "SET_COMPONENTS" => CanvasAction::SetComponents(parse_payload(tag, payload)?),
            "SET_EFFECTS" => CanvasAction::SetEffects(parse_payload(tag, payload)?),
            "SET_ENVIRONMENT" => CanvasAction::SetEnvironment(parse_payload(tag, payload)?),
            "SET_GEOMETRY" => CanvasAction::SetGeometry(parse_payload(tag, payload)?),
            "SET_SHADOWS" => CanvasAction::SetShadows(parse_payload(tag, payload)?),
            "SET_ICONOGRAPHY" => CanvasAction::SetIconography(parse_payload(tag, payload)?),
            "SET_POSITIONING" => CanvasAction::SetPositioning(parse_payload(tag, payload)?),
            "SET_WIDGETS" => CanvasAction::SetWidgets(parse_payload(tag, payload)?),
            "SET_BACKGROUNDS" => CanvasAction::SetBackgrounds(parse_payload(tag, payload)?),
            "SET_SECONDARY" => CanvasAction::SetSecondary(parse_payload(tag, payload)?),
            "SET_AI_CONFIG" => CanvasAction::SetAiConfig(parse_payload(tag, payload)?),
            "SET_DIALOGS" => CanvasAction::SetDialogs(parse_payload(tag, payload)?),
            "SET_TABS_CONFIG" => CanvasAction::SetTabsConfig(parse_payload(tag, payload)?),
            "SET_TOGGLES" => CanvasAction::SetToggles(parse_payload(tag, payload)?),
            "SET_AVATARS" => CanvasAction::SetAvatars(parse_payload(tag, payload)?),
            "SET_PROGRESS" => CanvasAction::SetProgressBars(parse_payload(tag, payload)?),
            "SET_TOASTS" => CanvasAction::SetToasts(parse_payload(tag, payload)?),
            "SET_NAV" => CanvasAction::SetNav(parse_payload(tag, payload)?),
            "SET_UI" => CanvasAction::SetUi(parse_payload(tag, payload)?),
            "SET_LAYOUT_CONFIG" => CanvasAction::SetLayoutConfig(parse_payload(tag, payload)?),
            "SET_STITCH_CODE" => {
                let stitch: StitchPayload = parse_payload(tag, payload)?;
                CanvasAction::SetStitchCode {
                    code: stitch.code,
                    screen_id: stitch.screen_id,
                }
            }
            "LOAD_STATE" => CanvasAction::LoadState(Box::new(CanvasState::from_partial(payload)?)),
            "RESET" => CanvasAction::Reset,
            _ => return Ok(None),
        };
        Ok(Some(action))
    }

    /// Like [`CanvasAction::from_tagged`], addressed by document section key instead of tag.
    pub fn for_section(section: &str, payload: &Value) -> CanvasResult<Option<Self>> {
        match Self::tag_for_section(section) {
            Some(tag) => Self::from_tagged(tag, payload),
            None => Ok(None),
        }
    }

    pub fn tag_for_section(section: &str) -> Option<&'static str> {
        SECTION_TAGS
            .iter()
            .find(|(key, _)| *key == section)
            .map(|(_, tag)| *tag)
    }

    pub fn section_keys() -> impl Iterator<Item = &'static str> {
        SECTION_TAGS.iter().map(|(key, _)| *key)
    }
}

fn parse_payload<T: DeserializeOwned>(tag: &str, payload: &Value) -> CanvasResult<T> {
    if !payload.is_object() {
        return Err(CanvasError::InvalidFormat(format!(
            "{tag} payload must be a JSON object"
        )));
    }
    serde_json::from_value(payload.clone()).map_err(|source| CanvasError::Parse {
        context: format!("{tag} payload"),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none, assert_ok, assert_some};
    use serde_json::json;

    #[test]
    fn unknown_tag_yields_none() {
        let action = assert_ok!(CanvasAction::from_tagged("SET_SPARKLES", &json!({})));
        assert_none!(action);
    }

    #[test]
    fn known_tag_round_trips_through_tag() {
        let action = assert_some!(assert_ok!(CanvasAction::from_tagged(
            "SET_GEOMETRY",
            &json!({ "radiusMd": 12 })
        )));
        assert_eq!(action.tag(), "SET_GEOMETRY");
        match action {
            CanvasAction::SetGeometry(patch) => assert_eq!(patch.radius_md, Some(12.0)),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn wrong_payload_shape_is_rejected() {
        assert_err!(CanvasAction::from_tagged("SET_PALETTE", &json!("purple")));
        assert_err!(CanvasAction::from_tagged(
            "SET_TYPOGRAPHY",
            &json!({ "baseSize": "large" })
        ));
    }

    #[test]
    fn stitch_code_screen_id_is_optional() {
        let action = assert_some!(assert_ok!(CanvasAction::from_tagged(
            "SET_STITCH_CODE",
            &json!({ "code": "<div/>" })
        )));
        assert_eq!(
            action,
            CanvasAction::SetStitchCode {
                code: "<div/>".to_string(),
                screen_id: None
            }
        );
    }

    #[test]
    fn every_section_key_has_a_tag() {
        for key in SECTION_KEYS {
            assert_some!(CanvasAction::tag_for_section(key), "no tag for {key}");
        }
        assert_some!(CanvasAction::tag_for_section("trinity"));
        assert_none!(CanvasAction::tag_for_section("stitchCode"));
    }
}
