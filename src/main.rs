use clap::Parser;
use ip_overlap_check::cli::{execute, Cli};
use ip_overlap_check::config::Config;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env()?;
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!(
            "Logging disabled, cannot load {}: {e}",
            config.log_config.display()
        );
    }
    log::info!("#Start main()");

    let cli = Cli::parse();
    let report = execute(&cli.command, cli.format, &config)?;
    println!("{report}");

    Ok(())
}
