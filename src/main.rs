use std::process;

use reqres_check::config::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let banner = include_str!("../banner");
    println!("{}", banner);

    let config = Config::build_config().unwrap_or_else(|err| {
        eprintln!("Error building config: {:#}", err);
        process::exit(1);
    });

    let default_level = if config.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match reqres_check::exec(&config) {
        Ok(summary) if summary.all_passed() => (),
        Ok(_) => process::exit(1),
        Err(err) => {
            eprintln!("Error executing test cases: {:#}", err);
            process::exit(1);
        }
    }
}
