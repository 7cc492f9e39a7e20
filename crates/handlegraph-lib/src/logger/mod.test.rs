use super::*;

#[test]
fn test_filter_directives_follow_level() {
    assert_eq!(
        filter_directives(LogLevel::Debug),
        "handlegraph_lib=debug,handlegraph=debug,handlegraph_tests=debug,warn"
    );
    assert!(filter_directives(LogLevel::Error).starts_with("handlegraph_lib=error,"));
}

#[test]
fn test_filter_directives_parse() {
    for verbosity in 0..=4 {
        let directives = filter_directives(LogLevel::from_verbosity(verbosity));
        assert!(EnvFilter::try_new(&directives).is_ok(), "{}", directives);
    }
}

#[test]
fn test_explicit_color_intent_ignores_terminal() {
    assert!(use_color(ColorIntent::Always, LogOutput::Stderr));
    assert!(use_color(ColorIntent::Always, LogOutput::Stdout));
    assert!(!use_color(ColorIntent::Never, LogOutput::Stderr));
    assert!(!use_color(ColorIntent::Never, LogOutput::Stdout));
}

#[test]
fn test_second_init_is_rejected() {
    // The only test in this binary that installs a subscriber
    let config = LoggerConfig {
        level: LogLevel::Warning,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        color: ColorIntent::Never,
    };

    Logger::init(&config).unwrap();
    assert!(matches!(
        Logger::init(&config),
        Err(LoggerError::AlreadyInitialized)
    ));
}
