//! E2E tests for registry failures
//!
//! Every failure must abort the command and leave no output file behind.

use anyhow::Result;
use handlegraph_lib::application::cli::Commands;
use handlegraph_lib::application::config::AppConfig;
use handlegraph_lib::registry::RegistryError;
use handlegraph_tests::TestEnvironment;
use handlegraph_tests::fixtures::{NAMELESS_PARAMETER_REGISTRY, TRUNCATED_REGISTRY};

#[test]
fn e2e_missing_registry_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let config = AppConfig {
        registry: env.root().join("absent.xml"),
        ..env.config.clone()
    };

    let err = env.run_with(Commands::Render, &config).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RegistryError>(),
        Some(RegistryError::FileReadError { .. })
    ));
    assert!(!config.output.exists());
    Ok(())
}

#[test]
fn e2e_truncated_registry_is_malformed_xml() -> Result<()> {
    let env = TestEnvironment::with_registry(TRUNCATED_REGISTRY)?;

    let err = env.run(Commands::Render).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RegistryError>(),
        Some(RegistryError::Xml { .. })
    ));
    assert!(!env.config.output.exists());
    Ok(())
}

#[test]
fn e2e_nameless_parameter_names_its_command() -> Result<()> {
    let env = TestEnvironment::with_registry(NAMELESS_PARAMETER_REGISTRY)?;

    let err = env
        .run(Commands::Catalog { kind: None })
        .unwrap_err();

    match err.downcast_ref::<RegistryError>() {
        Some(RegistryError::MalformedDeclaration { owner, .. }) => {
            assert_eq!(owner, "vkCreateInstance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn e2e_unwritable_output_reports_path() -> Result<()> {
    let env = TestEnvironment::new()?;
    let config = AppConfig {
        output: env.root().join("missing-dir").join("graph.gv"),
        ..env.config.clone()
    };

    let err = env.run_with(Commands::Render, &config).unwrap_err();
    assert!(format!("{err:#}").contains("missing-dir"));
    Ok(())
}
