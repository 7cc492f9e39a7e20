use super::*;
use crate::primitives::GraphFormat;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand_defaults_to_none() {
    let cli = Cli::try_parse_from(["handlegraph"]).unwrap();
    assert_eq!(cli.command, None);
}

#[test]
fn test_show_takes_handle() {
    let cli = Cli::try_parse_from(["handlegraph", "show", "VkPipeline"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Show {
            handle: "VkPipeline".to_string()
        })
    );
}

#[test]
fn test_order_include_weak_flag() {
    let cli = Cli::try_parse_from(["handlegraph", "order", "--include-weak"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Order { include_weak: true }));
}

#[test]
fn test_catalog_kind_is_optional() {
    let cli = Cli::try_parse_from(["handlegraph", "catalog", "operations"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Catalog {
            kind: Some(CatalogKind::Operations)
        })
    );

    let cli = Cli::try_parse_from(["handlegraph", "catalog"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Catalog { kind: None }));
}

#[test]
fn test_global_options_before_subcommand() {
    let cli = Cli::try_parse_from([
        "handlegraph",
        "--registry",
        "registry/vk.xml",
        "--format",
        "json",
        "render",
    ])
    .unwrap();

    assert_eq!(cli.config.registry.to_str(), Some("registry/vk.xml"));
    assert_eq!(cli.config.format, GraphFormat::Json);
    assert_eq!(cli.command, Some(Commands::Render));
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["handlegraph", "--format", "svg"]).is_err());
}

#[test]
fn test_cli_config_from_parsed_cli() {
    let cli = Cli::try_parse_from(["handlegraph", "-o", "out.gv", "order"]).unwrap();
    let config = CliConfig::from(cli);

    assert_eq!(config.app_config.output.to_str(), Some("out.gv"));
    assert_eq!(config.command, Some(Commands::Order { include_weak: false }));
}
