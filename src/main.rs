use clap::{Parser, Subcommand};
use rollprint::server::{self, AppState};
use rollprint::{AppConfig, Document, PrintOrchestrator, PrinterDriver};
use rollprint_render_lopdf::PdfSpoolDriver;
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

/// Prints receipts and debt statements on roll printers.
#[derive(Parser, Debug)]
#[command(name = "rollprint", version, about)]
struct Cli {
    /// JSON configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Printer profile to use instead of the configured default.
    #[arg(short, long)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a JSON print record.
    Print { file: PathBuf },
    /// Run only the dry-run pass and report the roll length.
    Measure { file: PathBuf },
    /// Serve the HTTP print endpoint.
    Serve {
        /// Overrides the configured bind address.
        #[arg(long)]
        bind: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(profile) = cli.profile {
        config.default_profile = profile;
        config.validate()?;
    }

    match cli.command {
        Command::Print { file } => {
            let orchestrator = orchestrator(&config)?;
            let report = orchestrator.print_value(&read_record(&file)?)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Measure { file } => {
            let orchestrator = orchestrator(&config)?;
            let document = Document::from_value(&read_record(&file)?)?;
            let measurement = orchestrator.measure(&document);
            println!("{}", serde_json::to_string_pretty(&measurement)?);
        }
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            let driver = spool_driver(&config)?;
            let state = AppState::from_config(&config, driver)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(&config, state))?;
        }
    }
    Ok(())
}

fn orchestrator(config: &AppConfig) -> Result<PrintOrchestrator, Box<dyn Error>> {
    let profile = config
        .default_profile()
        .cloned()
        .ok_or("default profile is not configured")?;
    Ok(PrintOrchestrator::new(profile, spool_driver(config)?)?)
}

/// A spool driver with a device directory for every configured profile.
fn spool_driver(config: &AppConfig) -> Result<Arc<dyn PrinterDriver>, Box<dyn Error>> {
    let dpi = config
        .default_profile()
        .map(|p| p.dpi)
        .unwrap_or(rollprint_device::DEFAULT_DPI);
    let driver = PdfSpoolDriver::with_dpi(&config.spool_dir, dpi);
    for profile in config.profiles.values() {
        driver.install(&profile.device_name)?;
    }
    Ok(Arc::new(driver))
}

fn read_record(path: &Path) -> Result<Value, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
