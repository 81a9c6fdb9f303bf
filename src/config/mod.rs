//! Command line configuration

use std::path::PathBuf;

use clap::Parser;
use jiff::civil::DateTime;

use crate::config::observability::LoggingConfig;

pub mod observability;

/// Basket rules demo configuration
#[derive(Debug, Parser)]
#[command(
    name = "basket-rules",
    about = "Apply promotion rules to a basket",
    long_about = None
)]
pub struct Config {
    /// Basket fixture file (YAML). The bundled demo basket is used when omitted.
    #[arg(short, long, env = "BASKET_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Evaluate promotions as of this local time (e.g. 2024-12-24T10:00). Defaults to now.
    #[arg(long, env = "EVALUATE_AT")]
    pub at: Option<DateTime>,

    /// Override the basket creation time (e.g. 2024-12-21T08:00).
    #[arg(long, env = "BASKET_CREATED")]
    pub created: Option<DateTime>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
