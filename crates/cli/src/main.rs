//! certmap - certificate template analyzer

#[cfg(feature = "inspect")]
mod analyze;
#[cfg(feature = "inspect")]
mod report;
mod worksheet;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use layout::{profile_from_file, LayoutProfile};

/// Relative path of the bundled certificate template
const DEFAULT_TEMPLATE: &str = "templates/certificate.pdf";

#[derive(Parser)]
#[command(name = "certmap")]
#[command(version)]
#[command(about = "Analyze a certificate template PDF and suggest text placement", long_about = None)]
struct Cli {
    /// Template PDF file
    #[arg(value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,

    /// Layout profile JSON (built-in certificate profile if omitted)
    #[arg(short, long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Page to analyze (1-indexed)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the manual measurement worksheet without opening the template
    #[arg(long)]
    manual: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let profile = load_profile(cli)?;

    #[cfg(feature = "inspect")]
    if !cli.manual {
        return analyze::run(cli, &profile);
    }

    #[cfg(not(feature = "inspect"))]
    if !cli.manual {
        log::info!("built without the `inspect` feature; printing the worksheet instead");
    }

    worksheet::print(&profile);
    Ok(())
}

fn load_profile(cli: &Cli) -> Result<LayoutProfile> {
    match &cli.profile {
        Some(path) => profile_from_file(path)
            .with_context(|| format!("failed to load profile {}", path.display())),
        None => Ok(LayoutProfile::certificate()),
    }
}
