pub mod cli;
pub mod core;
pub mod store;

use crate::cli::compare::CompareOptions;
use crate::cli::currency::CurrencyAction;
use crate::cli::listings::ListingOptions;
use crate::core::catalog::Catalog;
use crate::core::config::AppConfig;
use crate::core::currency::CurrencySettings;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Listings(ListingOptions),
    Compare(CompareOptions),
    Currency(CurrencyAction),
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Listings catalog starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    // The catalog is generated once per invocation and read-only after.
    let catalog = Catalog::generate(config.catalog.seed, config.catalog.size);
    debug!("Generated catalog with {} listings", catalog.len());

    let store = store::open_store(&config.default_data_path()?);
    let settings = CurrencySettings::new(store);

    match command {
        AppCommand::Listings(options) => cli::listings::run(&catalog, &settings, &options),
        AppCommand::Compare(options) => cli::compare::run(&catalog, &settings, &options),
        AppCommand::Currency(action) => cli::currency::run(&settings, &action),
    }
}
