// src/logging.rs

use color_eyre::eyre::Result;
use time::macros::format_description;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::AppConfig;

/// Initializes file-based logging. The terminal belongs to the UI, so nothing goes to stdout.
pub fn initialize_logging(config: &AppConfig) -> Result<()> {
    std::fs::create_dir_all(&config.data_dir)?;
    let log_file = std::fs::File::create(config.log_path())?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_timer(LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        )))
        .with_filter(EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
