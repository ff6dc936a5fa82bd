use rootmail_core::regions::is_ses_receiving_region;
use tracing_subscriber::EnvFilter;

/// JSON lines on stdout, `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_ansi(false)
        .with_target(false)
        .with_current_span(false)
        .without_time()
        .init();
}

pub fn warn_if_not_receiving_region(region: Option<&str>) {
    match region {
        Some(region) if is_ses_receiving_region(region) => {}
        Some(region) => tracing::warn!(region, "SES cannot receive mail in this region"),
        None => tracing::warn!("no AWS region configured"),
    }
}
