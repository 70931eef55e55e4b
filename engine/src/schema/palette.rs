use super::macros::{keyword_enum, section};
use crate::error::{CanvasError, CanvasResult};
use serde_json::Value;

section! {
    /// Core color roles of the edited theme.
    pub struct Palette / PalettePatch {
        primary: String = "#8B5CF6".into(),
        secondary: String = "#A78BFA".into(),
        accent: String = "#FBBF24".into(),
        background: String = "#0F0F23".into(),
        surface: String = "rgba(15, 15, 35, 0.65)".into(),
        text_primary: String = "#F8FAFC".into(),
        text_secondary: String = "rgba(248, 250, 252, 0.7)".into(),
        glass_border: String = "rgba(255, 255, 255, 0.12)".into(),
        trinity: Trinity = Trinity::default(),
    }
}

section! {
    pub struct ZenithAxis / ZenithAxisPatch {
        active: String = "#10B981".into(),
        glow: String = "rgba(16, 185, 129, 0.4)".into(),
    }
}

section! {
    pub struct HorizonteAxis / HorizonteAxisPatch {
        active: String = "#3B82F6".into(),
        panel: String = "rgba(59, 130, 246, 0.1)".into(),
    }
}

section! {
    pub struct NucleoAxis / NucleoAxisPatch {
        active: String = "#F59E0B".into(),
        panel: String = "rgba(245, 158, 11, 0.1)".into(),
    }
}

section! {
    pub struct BaseAxis / BaseAxisPatch {
        active: String = "#8B5CF6".into(),
        neutral: String = "rgba(139, 92, 246, 0.05)".into(),
    }
}

section! {
    /// The four-axis sub-palette. The axis set is fixed.
    pub struct Trinity / TrinityPatch {
        zenith: ZenithAxis = ZenithAxis::default(),
        horizonte: HorizonteAxis = HorizonteAxis::default(),
        nucleo: NucleoAxis = NucleoAxis::default(),
        base: BaseAxis = BaseAxis::default(),
    }
}

keyword_enum! {
    pub enum TrinityAxis {
        Zenith => "zenith",
        Horizonte => "horizonte",
        Nucleo => "nucleo",
        Base => "base",
    }
    default Zenith
}

/// Role update addressed to exactly one trinity axis.
#[derive(Debug, Clone, PartialEq)]
pub enum TrinityAxisPatch {
    Zenith(ZenithAxisPatch),
    Horizonte(HorizonteAxisPatch),
    Nucleo(NucleoAxisPatch),
    Base(BaseAxisPatch),
}

impl TrinityAxisPatch {
    pub fn axis(&self) -> TrinityAxis {
        match self {
            TrinityAxisPatch::Zenith(_) => TrinityAxis::Zenith,
            TrinityAxisPatch::Horizonte(_) => TrinityAxis::Horizonte,
            TrinityAxisPatch::Nucleo(_) => TrinityAxis::Nucleo,
            TrinityAxisPatch::Base(_) => TrinityAxis::Base,
        }
    }

    /// Builds a patch for `axis` from a JSON object of role values.
    pub fn from_json(axis: TrinityAxis, roles: &Value) -> CanvasResult<Self> {
        let context = || format!("trinity axis '{axis}'");
        let patch = match axis {
            TrinityAxis::Zenith => TrinityAxisPatch::Zenith(parse_roles(roles, context)?),
            TrinityAxis::Horizonte => TrinityAxisPatch::Horizonte(parse_roles(roles, context)?),
            TrinityAxis::Nucleo => TrinityAxisPatch::Nucleo(parse_roles(roles, context)?),
            TrinityAxis::Base => TrinityAxisPatch::Base(parse_roles(roles, context)?),
        };
        Ok(patch)
    }

    /// Accepts the `{ "<axis>": { ...roles } }` shape used by tagged payloads.
    ///
    /// The object must name exactly one axis.
    pub fn from_keyed(payload: &Value) -> CanvasResult<Self> {
        let object = payload.as_object().ok_or_else(|| {
            CanvasError::InvalidFormat("trinity payload must be a JSON object".to_string())
        })?;

        let mut entries = object.iter();
        match (entries.next(), entries.next()) {
            (Some((name, roles)), None) => {
                let axis = name
                    .parse::<TrinityAxis>()
                    .map_err(CanvasError::InvalidFormat)?;
                Self::from_json(axis, roles)
            }
            _ => Err(CanvasError::InvalidFormat(format!(
                "trinity payload must name exactly one axis, found {}",
                object.len()
            ))),
        }
    }
}

fn parse_roles<T, F>(roles: &Value, context: F) -> CanvasResult<T>
where
    T: serde::de::DeserializeOwned,
    F: Fn() -> String,
{
    serde_json::from_value(roles.clone()).map_err(|source| CanvasError::Parse {
        context: context(),
        source,
    })
}

impl Trinity {
    /// Merges the roles of a single axis; the other three axes are untouched.
    pub fn merge_axis(&mut self, patch: TrinityAxisPatch) {
        match patch {
            TrinityAxisPatch::Zenith(roles) => self.zenith.merge(roles),
            TrinityAxisPatch::Horizonte(roles) => self.horizonte.merge(roles),
            TrinityAxisPatch::Nucleo(roles) => self.nucleo.merge(roles),
            TrinityAxisPatch::Base(roles) => self.base.merge(roles),
        }
    }

    pub fn active(&self, axis: TrinityAxis) -> &str {
        match axis {
            TrinityAxis::Zenith => &self.zenith.active,
            TrinityAxis::Horizonte => &self.horizonte.active,
            TrinityAxis::Nucleo => &self.nucleo.active,
            TrinityAxis::Base => &self.base.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use serde_json::json;

    #[test]
    fn merge_axis_only_touches_named_axis() {
        let mut trinity = Trinity::default();
        trinity.merge_axis(TrinityAxisPatch::Zenith(ZenithAxisPatch {
            active: Some("#111111".to_string()),
            ..Default::default()
        }));

        assert_eq!(trinity.zenith.active, "#111111");
        assert_eq!(trinity.zenith.glow, ZenithAxis::default().glow);
        assert_eq!(trinity.horizonte, HorizonteAxis::default());
        assert_eq!(trinity.nucleo, NucleoAxis::default());
        assert_eq!(trinity.base, BaseAxis::default());
    }

    #[test]
    fn keyed_payload_requires_single_known_axis() {
        let patch = assert_ok!(TrinityAxisPatch::from_keyed(
            &json!({ "nucleo": { "panel": "#222" } })
        ));
        assert_eq!(patch.axis(), TrinityAxis::Nucleo);

        assert_err!(TrinityAxisPatch::from_keyed(&json!({ "logica": {} })));
        assert_err!(TrinityAxisPatch::from_keyed(
            &json!({ "zenith": {}, "base": {} })
        ));
        assert_err!(TrinityAxisPatch::from_keyed(&json!(["zenith"])));
    }

    #[test]
    fn wrong_role_type_is_a_parse_error() {
        let err = TrinityAxisPatch::from_json(TrinityAxis::Base, &json!({ "active": 3 }))
            .unwrap_err();
        assert!(matches!(err, CanvasError::Parse { .. }));
    }
}
