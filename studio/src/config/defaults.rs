/// Default configuration file embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("../../config.default.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_default_config_is_not_empty() {
        assert!(!DEFAULT_CONFIG.is_empty());
        assert!(DEFAULT_CONFIG.contains("[generation]"));
        assert!(DEFAULT_CONFIG.contains("[export]"));
    }

    #[test]
    fn test_default_config_is_valid_toml() {
        let parsed: toml::Table = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(
            parsed["autosave_debounce_ms"].as_integer(),
            Some(super::super::limits::DEFAULT_AUTOSAVE_DEBOUNCE_MS as i64)
        );
        assert!(parsed["logging"].is_table());
    }
}
