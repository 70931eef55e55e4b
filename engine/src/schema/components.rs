use super::macros::{keyword_enum, section};

keyword_enum! {
    pub enum ButtonStyle {
        Default => "default",
        Glass => "glass",
        Liquid => "liquid",
        Neon => "neon",
        Brutal => "brutal",
    }
    default Glass
}

keyword_enum! {
    pub enum CardPreset {
        Crystal => "crystal",
        LiquidAction => "liquid-action",
        Holographic => "holographic",
        HyperCrystal => "hyper-crystal",
    }
    default Crystal
}

keyword_enum! {
    pub enum InputBorderStyle {
        None => "none",
        Subtle => "subtle",
        Solid => "solid",
        Glow => "glow",
    }
    default Subtle
}

keyword_enum! {
    pub enum TooltipStyle {
        Glass => "glass",
        Solid => "solid",
        Minimal => "minimal",
    }
    default Glass
}

keyword_enum! {
    pub enum BadgeStyle {
        Pill => "pill",
        Square => "square",
        Dot => "dot",
    }
    default Pill
}

section! {
    /// Component presets and interaction toggles.
    ///
    /// `button_radius` is in pixels; anything above the pill threshold renders fully rounded.
    pub struct Components / ComponentsPatch {
        button_style: ButtonStyle = ButtonStyle::Glass,
        button_radius: f64 = 9999.0,
        button_glow: bool = true,
        card_preset: CardPreset = CardPreset::Crystal,
        input_border_style: InputBorderStyle = InputBorderStyle::Subtle,
        input_floating_label: bool = true,
        animate_hover: bool = true,
        animate_click: bool = true,
        micro_interactions: bool = true,
        transition_speed: f64 = 300.0,
        tooltip_style: TooltipStyle = TooltipStyle::Glass,
        badge_style: BadgeStyle = BadgeStyle::Pill,
        focus_ring_color: String = "#8B5CF6".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn keywords_serialize_with_their_dashed_spelling() {
        assert_eq!(
            serde_json::to_value(CardPreset::HyperCrystal).unwrap(),
            json!("hyper-crystal")
        );
        assert_eq!(
            CardPreset::from_str("liquid-action").unwrap(),
            CardPreset::LiquidAction
        );
        assert!(ButtonStyle::from_str("wobbly").is_err());
    }

    #[test]
    fn unknown_keyword_is_rejected_on_deserialize() {
        let parsed: Result<ComponentsPatch, _> =
            serde_json::from_value(json!({ "buttonStyle": "wobbly" }));
        assert!(parsed.is_err());
    }
}
