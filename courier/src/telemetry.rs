use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize logging from configuration
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// `filter_override` takes precedence over the configured filter.
pub fn init(config: &LoggingConfig, filter_override: Option<&str>) -> anyhow::Result<()> {
    let directive = filter_override.unwrap_or(config.filter.as_str());
    let filter = EnvFilter::try_new(directive).map_err(|e| anyhow::anyhow!("invalid log filter '{directive}': {e}"))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match config.format {
        LogFormat::Text => tracing_subscriber::registry().with(filter).with(fmt_layer).try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init()?,
    }

    Ok(())
}
