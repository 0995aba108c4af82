use contact_list::config::Config;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let (config, config_error) = match Config::from_env() {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // stderr only; stdout belongs to the menu
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_error {
        eprintln!("Warning: {}. Using defaults.", e);
        warn!("configuration fell back to defaults: {}", e);
    }

    if let Err(e) = contact_list::cli::run(config) {
        error!("terminal I/O failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
