use super::*;
use crate::primitives::{ColorIntent, GraphFormat};
use crate::testing::write_sample_registry;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_resolve_applies_cli_values() {
    let dir = TempDir::new().unwrap();
    let registry = write_sample_registry(dir.path()).unwrap();

    let cli = AppConfig {
        registry: registry.clone(),
        format: GraphFormat::Json,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(cli).unwrap();
    assert_eq!(config.registry, registry);
    assert_eq!(config.format, GraphFormat::Json);
    assert_eq!(config.color, ColorIntent::Never);
}

#[test]
fn test_resolve_fails_for_missing_registry() {
    let cli = AppConfig {
        registry: PathBuf::from("/nonexistent/registry/vk.xml"),
        ..AppConfig::default()
    };

    let err = AppConfig::resolve(cli).unwrap_err();
    assert!(matches!(err, ConfigError::RegistryNotFound { .. }));
}
