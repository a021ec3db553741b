use clap::Parser;
use script_templates::config::cli::log_parsed;
use script_templates::core::pkg_query::{filter_packages, listing_invocation, PackageMatcher};
use script_templates::utils::logger;
use script_templates::utils::validation::validate_non_empty_string;
use script_templates::{run_cmd_or_exit, PkgQueryArgs};

fn main() {
    let args = PkgQueryArgs::parse();

    logger::init_cli_logger(args.verbose);
    log_parsed(&args);

    if let Err(e) = validate_non_empty_string("package", &args.package) {
        e.exit();
    }
    let matcher = PackageMatcher::new(&args.package, args.fixed_strings).unwrap_or_else(|e| e.exit());

    let listing = run_cmd_or_exit(&listing_invocation(&args.rpm));
    let packages = filter_packages(&listing, &matcher);
    tracing::debug!(
        "{} of {} installed packages match '{}'",
        packages.len(),
        listing.lines().count(),
        args.package
    );

    println!("{}", packages.join("\n"));
}
