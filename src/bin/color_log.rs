use anyhow::Context;
use clap::Parser;
use script_templates::config::cli::describe;
use script_templates::{ColorLogArgs, Logger};

fn main() -> anyhow::Result<()> {
    let args = ColorLogArgs::parse();

    let config = args
        .logger_config()
        .context("Failed to load logger configuration")?;
    let logger = Logger::new(&config, args.verbose).with_context(|| {
        format!("Failed to set up logging to {}", config.file.path.display())
    })?;

    match describe(&args) {
        Ok(parsed) => logger.debug(&format!("Parsed arguments: {}", parsed)),
        Err(e) => logger.warning(&format!("Could not render parsed arguments: {}", e)),
    }

    logger.debug("Hello World");
    logger.info("Hello World");
    logger.warning("Hello World");
    logger.error("Hello World");
    logger.critical("Hello World");

    Ok(())
}
