use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use script_templates::config::cli::log_parsed;
use script_templates::core::file_io::{open_input, open_output, IoPair};
use script_templates::utils::logger;
use script_templates::FileIoArgs;
use std::path::Path;

/// Reports an unopenable file the way clap reports a bad value: usage on
/// stderr, exit status 2.
fn cannot_open(argument: &str, path: &Path, err: std::io::Error) -> ! {
    FileIoArgs::command()
        .error(
            ErrorKind::Io,
            format!("argument {}: can't open '{}': {}", argument, path.display(), err),
        )
        .exit()
}

fn main() {
    let args = FileIoArgs::parse();

    logger::init_cli_logger(args.verbose);
    log_parsed(&args);

    let input = open_input(&args.infile).unwrap_or_else(|e| cannot_open("infile", &args.infile, e));
    let output = open_output(Some(args.outfile.as_path()))
        .unwrap_or_else(|e| cannot_open("-o/--outfile", &args.outfile, e));

    if let Err(e) = IoPair::new(input, output).pass_through() {
        tracing::error!("Copy from {} failed: {}", args.infile.display(), e);
        e.exit();
    }
}
