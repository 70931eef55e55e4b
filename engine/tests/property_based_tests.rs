use engine::merge::merge_values;
use engine::schema::{CanvasState, SECTION_KEYS};
use engine::store::{CanvasAction, reduce};
use engine::translation::{ranges, to_appearance_config, to_css_properties};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z#0-9]{0,8}".prop_map(Value::from),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z]{1,6}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn patch_object() -> impl Strategy<Value = Map<String, Value>> {
    let keys = prop::sample::select(SECTION_KEYS.to_vec()).prop_map(str::to_string);
    prop::collection::btree_map(keys, json_value(), 0..6)
        .prop_map(|map| map.into_iter().collect::<Map<_, _>>())
}

fn any_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1_000_000.0f64..1_000_000.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

#[cfg(test)]
mod merge_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn merge_keeps_every_base_key(patch in patch_object()) {
            let base = serde_json::to_value(CanvasState::default()).unwrap();
            let mut merged = base.clone();
            merge_values(&mut merged, &Value::Object(patch.clone()));

            let base_map = base.as_object().unwrap();
            let merged_map = merged.as_object().unwrap();

            // Property: no key of the complete document ever disappears
            for key in base_map.keys() {
                prop_assert!(merged_map.contains_key(key));
            }

            // Property: untouched sections are preserved exactly
            for (key, value) in base_map {
                if !patch.contains_key(key) {
                    prop_assert_eq!(&merged_map[key], value);
                }
            }

            // Property: non-object patch values replace wholesale
            for (key, value) in &patch {
                if !value.is_object() {
                    prop_assert_eq!(&merged_map[key], value);
                }
            }
        }

        #[test]
        fn merging_an_empty_patch_is_identity(seed in patch_object()) {
            let mut document = serde_json::to_value(CanvasState::default()).unwrap();
            merge_values(&mut document, &Value::Object(seed));
            let before = document.clone();
            merge_values(&mut document, &Value::Object(Map::new()));
            prop_assert_eq!(document, before);
        }
    }
}

#[cfg(test)]
mod clamp_property_tests {
    use super::*;
    use engine::translation::{AppearanceFragment, FieldRange};

    /// Every clamped fragment field next to the range that bounds it.
    fn fragment_fields() -> [(FieldRange, fn(&AppearanceFragment) -> f64); 17] {
        [
            (ranges::FONT_SIZE_SCALE, |f| f.typography.font_size_scale),
            (ranges::RADIUS, |f| f.styling.radius),
            (ranges::GLASS_INTENSITY, |f| f.styling.glass_intensity),
            (ranges::OPACITY, |f| f.styling.opacity),
            (ranges::NOISE_OPACITY, |f| f.styling.noise_opacity),
            (ranges::CHROMATIC_ABERRATION, |f| f.styling.chromatic_aberration),
            (ranges::GLOW_INTENSITY, |f| f.styling.glow_intensity),
            (ranges::REFRACTION, |f| f.styling.refraction),
            (ranges::BUTTON_RADIUS, |f| f.buttons.radius),
            (ranges::DISPLACEMENT_SCALE, |f| f.liquid_glass.displacement_scale),
            (ranges::BLUR_AMOUNT, |f| f.liquid_glass.blur_amount),
            (ranges::ELASTICITY, |f| f.liquid_glass.elasticity),
            (ranges::ABERRATION_INTENSITY, |f| f.liquid_glass.aberration_intensity),
            (ranges::DIFFUSION_BLUR, |f| f.text_diffusion.blur),
            (ranges::DIFFUSION_OPACITY, |f| f.text_diffusion.opacity),
            (ranges::DIFFUSION_GLOW, |f| f.text_diffusion.glow_strength),
            (ranges::TRANSITION_DURATION, |f| f.animations.transition_duration),
        ]
    }

    #[test]
    fn every_declared_range_is_checked() {
        let checked: Vec<_> = fragment_fields()
            .into_iter()
            .map(|(range, _)| range.field)
            .collect();
        let declared: Vec<_> = ranges::ALL.iter().map(|range| range.field).collect();
        assert_eq!(checked, declared);
    }

    proptest! {
        #[test]
        fn every_fragment_number_lands_in_its_range(
            inputs in prop::collection::vec(any_number(), 16),
        ) {
            let mut state = CanvasState::default();
            state.typography.base_size = inputs[0];
            state.geometry.radius_md = inputs[1];
            state.effects.backdrop_blur = inputs[2];
            state.effects.glass_saturation = inputs[3];
            state.effects.noise_opacity = inputs[4];
            state.effects.chromatic_aberration = inputs[5];
            state.effects.glow_intensity = inputs[6];
            state.effects.refraction_index = inputs[7];
            state.components.button_radius = inputs[8];
            state.effects.displacement_scale = inputs[9];
            state.effects.blur_amount = inputs[10];
            state.effects.elasticity = inputs[11];
            state.effects.text_diffusion_blur = inputs[12];
            state.effects.text_diffusion_opacity = inputs[13];
            state.effects.text_diffusion_glow = inputs[14];
            state.components.transition_speed = inputs[15];

            let fragment = to_appearance_config(&state);
            for (range, read) in fragment_fields() {
                let value = read(&fragment);
                prop_assert!(
                    range.contains(value),
                    "{} = {} outside [{}, {}]", range.field, value, range.min, range.max
                );
            }
        }

        #[test]
        fn in_range_values_pass_through_unchanged(blur in 0.0f64..=60.0) {
            let mut state = CanvasState::default();
            state.effects.backdrop_blur = blur;
            prop_assert_eq!(to_appearance_config(&state).styling.glass_intensity, blur);
        }
    }
}

#[cfg(test)]
mod reducer_property_tests {
    use super::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn css_projection_is_a_pure_function_of_state(primary in "#[0-9A-F]{6}", blur in 0.0f64..100.0) {
            let mut state = CanvasState::default();
            state.palette.primary = primary;
            state.effects.backdrop_blur = blur;
            prop_assert_eq!(to_css_properties(&state), to_css_properties(&state.clone()));

            let names: Vec<_> = to_css_properties(&state).names().collect();
            let default_names: Vec<_> = to_css_properties(&CanvasState::default()).names().collect();
            prop_assert_eq!(names, default_names);
        }

        #[test]
        fn trinity_updates_never_leak_across_axes(color in "#[0-9a-f]{6}") {
            let action = CanvasAction::from_tagged(
                "SET_TRINITY",
                &json!({ "horizonte": { "panel": color.clone() } }),
            ).unwrap().unwrap();
            let before = CanvasState::default();
            let after = reduce(before.clone(), action);

            prop_assert_eq!(&after.palette.trinity.horizonte.panel, &color);
            prop_assert_eq!(&after.palette.trinity.horizonte.active, &before.palette.trinity.horizonte.active);
            prop_assert_eq!(&after.palette.trinity.zenith, &before.palette.trinity.zenith);
            prop_assert_eq!(&after.palette.trinity.nucleo, &before.palette.trinity.nucleo);
            prop_assert_eq!(&after.palette.trinity.base, &before.palette.trinity.base);
        }

        #[test]
        fn section_actions_leave_other_sections_untouched(
            key in prop::sample::select(SECTION_KEYS.to_vec()),
            field in any::<prop::sample::Index>(),
            number in any::<u8>(),
        ) {
            let before = CanvasState::default();
            let document = serde_json::to_value(&before).unwrap();
            let fields = document[key].as_object().unwrap();

            // Edit one field of the section with a value of the same JSON kind.
            let name = fields.keys().nth(field.index(fields.len())).unwrap().clone();
            let edited = match &fields[&name] {
                Value::Number(_) => Value::from(number),
                Value::Bool(flag) => Value::Bool(!flag),
                other => other.clone(),
            };
            let payload = Value::Object(Map::from_iter([(name.clone(), edited)]));

            let action = CanvasAction::for_section(key, &payload);
            prop_assert!(action.is_ok(), "{} rejected {}: {:?}", key, payload, action.err());
            let action = action.unwrap().unwrap();
            let after = serde_json::to_value(reduce(before, action)).unwrap();

            for (other, value) in document.as_object().unwrap() {
                if other != key {
                    prop_assert_eq!(&after[other], value, "section {} changed", other);
                }
            }
            for (other, value) in fields {
                if *other != name {
                    prop_assert_eq!(&after[key][other], value, "{}.{} changed", key, other);
                }
            }
        }

        #[test]
        fn reset_is_default_after_any_edit(size in 1.0f64..64.0, angle in 0.0f64..360.0) {
            let mut state = CanvasState::default();
            state.typography.base_size = size;
            state.effects.gradient_angle = angle;
            prop_assert_eq!(reduce(state, CanvasAction::Reset), CanvasState::default());
        }
    }
}
