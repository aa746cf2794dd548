//! Contact Directory - demonstration entry point
//!
//! Builds a directory, runs add/edit/search/sort/delete against it and prints
//! each result as JSON on stdout. Logs go to stderr.

use anyhow::Result;
use contact_directory::{Config, Contact, ContactDirectory};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut directory = ContactDirectory::from_config(&config);
    info!("Edit policy: {}", directory.policy());

    directory.add(Contact::new("John Doe", "john@example.com", "1234567890"))?;
    directory.add(Contact::new("Jane Smith", "jane@example.com", "9876543210"))?;
    directory.add(Contact::new("David Johnson", "david@example.com", "3456789012"))?;

    directory.edit(
        "jane@example.com",
        Contact::new("Jane Brown", "jane@example.com", "9999999999"),
    )?;

    let search_results = directory.search("Doe");
    for contact in search_results.iter().take(config.search_result_preview) {
        info!("Search hit: {}", contact);
    }
    print_json("Search Results", &search_results)?;

    let sorted = directory.sort("name")?;
    print_json("Sorted Contacts", &sorted)?;

    directory.delete("john@example.com")?;
    print_json("Remaining Contacts", &directory.contacts())?;

    info!("Directory demo complete with {} contacts", directory.len());
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(label: &str, value: &T) -> Result<()> {
    println!("{}: {}", label, serde_json::to_string_pretty(value)?);
    Ok(())
}
