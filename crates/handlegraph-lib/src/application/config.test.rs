use super::*;
use crate::testing::write_sample_registry;
use tempfile::TempDir;

#[test]
fn test_defaults_match_clap_defaults() {
    let parsed = AppConfig::try_parse_from(["handlegraph"]).unwrap();
    let default = AppConfig::default();

    assert_eq!(parsed.registry, default.registry);
    assert_eq!(parsed.output, default.output);
    assert_eq!(parsed.format, default.format);
    assert_eq!(parsed.vendor_suffixes, default.vendor_suffixes);
    assert_eq!(parsed.log_level, default.log_level);
}

#[test]
fn test_vendor_suffixes_split_on_comma() {
    let parsed =
        AppConfig::try_parse_from(["handlegraph", "--vendor-suffix", "EXT,KHR"]).unwrap();
    assert_eq!(parsed.vendor_suffixes, vec!["EXT", "KHR"]);
    assert!(parsed.filter_policy().is_vendor_handle("VkSurfaceKHR"));
}

#[test]
fn test_merge_keeps_base_for_default_fields() {
    let base = AppConfig {
        registry: PathBuf::from("/opt/vk.xml"),
        ..AppConfig::default()
    };
    let other = AppConfig {
        format: GraphFormat::Json,
        log_level: 3,
        ..AppConfig::default()
    };

    let merged = base.merge_with(other);
    assert_eq!(merged.registry, PathBuf::from("/opt/vk.xml"));
    assert_eq!(merged.format, GraphFormat::Json);
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.output, PathBuf::from(defaults::OUTPUT));
}

#[test]
fn test_validate_requires_existing_registry() {
    let mut config = AppConfig {
        registry: PathBuf::from("/nonexistent/vk.xml"),
        ..AppConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::RegistryNotFound { .. })
    ));
}

#[test]
fn test_validate_trims_and_rejects_empty_suffixes() {
    let dir = TempDir::new().unwrap();
    let registry = write_sample_registry(dir.path()).unwrap();

    let mut config = AppConfig {
        registry: registry.clone(),
        vendor_suffixes: vec![" EXT ".to_string(), "NV".to_string()],
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(config.vendor_suffixes, vec!["EXT", "NV"]);

    let mut config = AppConfig {
        registry,
        vendor_suffixes: vec!["EXT".to_string(), " ".to_string()],
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_logger_config_from_app_config() {
    let config = AppConfig {
        log_level: 4,
        log_format: LogFormat::Json,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Trace);
    assert_eq!(logger.format, LogFormat::Json);
    assert_eq!(logger.color, ColorIntent::Never);
}
