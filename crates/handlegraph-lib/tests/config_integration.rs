use clap::Parser;
use handlegraph_lib::application::cli::{Cli, Commands};
use handlegraph_lib::application::config::AppConfig;
use handlegraph_lib::primitives::{ColorIntent, ConfigError, GraphFormat, LogFormat};
use std::path::PathBuf;
use tempfile::TempDir;

const MINIMAL_REGISTRY: &str = r#"<registry>
    <types>
        <type category="handle"><type>VK_DEFINE_HANDLE</type>(<name>VkInstance</name>)</type>
    </types>
</registry>
"#;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert_eq!(config.registry, PathBuf::from("./vk.xml"));
    assert_eq!(config.output, PathBuf::from("VkHandleCreation.gv"));
    assert_eq!(config.format, GraphFormat::Dot);
    assert_eq!(config.vendor_suffixes, vec!["EXT", "NV", "NVX", "INTEL"]);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Pretty,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    // Override values should be preserved
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.log_format, LogFormat::Pretty);
    assert_eq!(merged.color, ColorIntent::Never);

    // Default values should remain for non-overridden fields
    assert_eq!(merged.format, GraphFormat::Dot);
}

#[test]
fn test_cli_to_resolved_config() {
    let dir = TempDir::new().unwrap();
    let registry = dir.path().join("vk.xml");
    std::fs::write(&registry, MINIMAL_REGISTRY).unwrap();

    let cli = Cli::try_parse_from([
        "handlegraph",
        "--registry",
        registry.to_str().unwrap(),
        "--log-format",
        "json",
        "order",
    ])
    .unwrap();

    assert_eq!(cli.command, Some(Commands::Order { include_weak: false }));

    let config = AppConfig::resolve(cli.config).unwrap();
    assert_eq!(config.registry, registry);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_resolve_rejects_missing_registry() {
    let dir = TempDir::new().unwrap();
    let cli = AppConfig {
        registry: dir.path().join("vk.xml"),
        ..AppConfig::default()
    };

    assert!(matches!(
        AppConfig::resolve(cli),
        Err(ConfigError::RegistryNotFound { .. })
    ));
}
