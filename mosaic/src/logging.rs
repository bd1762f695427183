//! Log setup for hosts: `RUST_LOG` wins over the configured level.
use tracing::subscriber::SetGlobalDefaultError;
use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald")]
mod journald;

/// Installs the global subscriber.
///
/// Returns the parse error if `level` was not a valid filter; logging then falls back to `info`.
///
/// # Errors
///
/// Errors if a global subscriber was already installed.
pub fn setup_logging(level: &str) -> Result<Option<ParseError>, SetGlobalDefaultError> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_owned());
    let (subscriber, parse_err) = parse_log_level(&level);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(parse_err)
}

#[must_use]
pub fn parse_log_level(level: &str) -> (impl Subscriber, Option<ParseError>) {
    let (filter, parse_err) = build_filter(level);
    (get_subscriber(filter), parse_err)
}

fn build_filter(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level)
    {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    }
}

#[allow(clippy::let_and_return)]
fn get_subscriber(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    #[cfg(feature = "journald")]
    let subscriber = journald::add_layer(subscriber);

    subscriber
}
