use clap::Parser;
use ipv4_subnet_calc::input::from_args;
use ipv4_subnet_calc::logging::{init_logging, LOG_CONFIG_FILE};
use ipv4_subnet_calc::output::{print_report, render, OutputFormat};
use ipv4_subnet_calc::{Config, Validation};
use std::error::Error;
use std::process::ExitCode;

/// IPv4 subnet calculator
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Address as a dotted quad, optionally with /prefix
    address: String,

    /// Subnet mask, e.g. 255.255.255.0
    #[arg(short, long)]
    mask: Option<String>,

    /// Prefix length, e.g. 24
    #[arg(short, long, allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Reject non-contiguous masks
    #[arg(long)]
    strict: bool,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = init_logging(LOG_CONFIG_FILE) {
        eprintln!("Logging disabled: {e}");
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run() failed: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    let validation = if cli.strict {
        Validation::Strict
    } else {
        config.validation
    };

    let subnet = from_args(
        &cli.address,
        cli.mask.as_deref(),
        cli.prefix.as_deref(),
        validation,
    )?;

    match cli.format.unwrap_or(config.format) {
        OutputFormat::Text => print_report(&subnet),
        format => println!("{}", render(&subnet, format)?),
    }

    Ok(())
}
