use clap::Parser;
use script_templates::config::cli::log_parsed;
use script_templates::core::power::power_line;
use script_templates::utils::logger;
use script_templates::PowerArgs;

fn main() {
    let args = PowerArgs::parse();

    logger::init_cli_logger(args.verbose);
    log_parsed(&args);

    match power_line(&args.number, args.power) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            tracing::error!("Could not compute {} ** {}: {}", args.number, args.power, e);
            e.exit();
        }
    }
}
