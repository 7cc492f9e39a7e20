use crate::primitives::*;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Set once the subscriber is installed
static INSTALLED: OnceLock<()> = OnceLock::new();

/// Process-wide tracing subscriber setup
#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Install the global tracing subscriber
    pub fn init(config: &LoggerConfig) -> Result<(), LoggerError> {
        if INSTALLED.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        // RUST_LOG wins; otherwise this workspace at the configured level, everything else at warn
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directives(config.level)));

        let ansi = use_color(config.color, config.output);
        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(ansi)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        INSTALLED
            .set(())
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            ansi,
            "Logger initialized"
        );

        Ok(())
    }
}

/// EnvFilter directives for a verbosity level
pub fn filter_directives(level: LogLevel) -> String {
    let level = level.as_directive();
    format!("handlegraph_lib={level},handlegraph={level},handlegraph_tests={level},warn")
}

/// Resolve a color intent against the terminal behind `output`
pub fn use_color(intent: ColorIntent, output: LogOutput) -> bool {
    match intent {
        ColorIntent::Always => true,
        ColorIntent::Never => false,
        ColorIntent::Auto => match output {
            LogOutput::Stderr => console::colors_enabled_stderr(),
            LogOutput::Stdout => console::colors_enabled(),
        },
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
