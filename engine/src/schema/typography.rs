use super::macros::section;

section! {
    /// Font stacks and type scale.
    ///
    /// `base_size` is in pixels; tracking values are in `em`.
    pub struct Typography / TypographyPatch {
        font_main: String = "'Inter', sans-serif".into(),
        font_headline: String = "'Outfit', sans-serif".into(),
        font_code: String = "'Fira Code', monospace".into(),
        base_size: f64 = 16.0,
        scale_ratio: f64 = 1.25,
        header_weight: u32 = 700,
        body_weight: u32 = 400,
        header_tracking: f64 = -0.02,
        body_tracking: f64 = 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_preserves_absent_fields() {
        let mut typography = Typography::default();
        typography.merge(TypographyPatch {
            base_size: Some(18.0),
            ..Default::default()
        });
        assert_eq!(typography.base_size, 18.0);
        assert_eq!(typography.font_main, Typography::default().font_main);
    }

    #[test]
    fn empty_patch_round_trips_as_empty_object() {
        let patch = TypographyPatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }
}
