use tallysheet::{report, startup};
use tracing::info;

fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting tallysheet");

    // Load configuration
    let config = startup::load_config()?;

    // Tally the configured sheet
    report::run(&config)
}
