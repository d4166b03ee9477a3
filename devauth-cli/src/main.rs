//! devauth: manage device authentication definitions
//!
//! Usage:
//!   devauth --app-id <ID> init devices.dat
//!   devauth --app-id <ID> add devices.dat --name PC-1 --serial SN12345
//!   devauth --app-id <ID> check devices.dat PC-1
//!   devauth hash setup.exe --algorithm sha256
//!   devauth probe
//!
//! The application identifier can also be supplied through `DEVAUTH_APP_ID`.
//! It is never printed or logged.

use std::{io::{self, Write}, path::PathBuf, process::ExitCode, sync::Arc};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use devauth_auth::{DiskClass, DiskIdentifier, HashAlgorithm, SystemProvider};
use devauth_cli::{check_exit_status, EXIT_ERROR};
use devauth_define::Device;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "devauth")]
#[command(about = "Manage and check device authentication definitions")]
struct Args {
    /// Application identifier the definition is keyed to
    #[arg(long, env = "DEVAUTH_APP_ID", hide_env_values = true, global = true)]
    app_id: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write an empty definition
    Init {
        file: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Append a device to a definition
    Add {
        file: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        serial: String,
        #[arg(long, default_value = "")]
        instance_path: String,
        #[arg(long)]
        comment: Option<String>,
    },
    /// List devices in definition order
    List { file: PathBuf },
    /// Show the first device with a name
    Show { file: PathBuf, name: String },
    /// Check a defined device against this machine's disks
    Check {
        file: PathBuf,
        name: String,
        /// Identifier to compare
        #[arg(long, value_enum, default_value_t = By::Serial)]
        by: By,
        /// Compare against external (USB) disks instead of internal ones
        #[arg(long)]
        external: bool,
    },
    /// Print a file digest
    Hash {
        path: PathBuf,
        #[arg(short, long, default_value = "sha256")]
        algorithm: HashAlgorithm,
    },
    /// Print the identifiers this machine reports
    Probe,
}

#[derive(Clone, Copy, ValueEnum)]
enum By {
    Serial,
    InstancePath,
}

fn main() -> ExitCode {
    // Usage errors exit with EXIT_ERROR, not clap's 2 (EXIT_UNAVAILABLE).
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let default_level = if args.verbose { "debug" } else { "info" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(args: Args) -> Result<u8> {
    let mut stdout = io::stdout().lock();
    match args.command {
        Command::Init { file, force } => {
            devauth_cli::init(&file, app_id(&args.app_id)?, force)?;
        }
        Command::Add {
            file,
            name,
            serial,
            instance_path,
            comment,
        } => {
            let mut device = Device::new(name, serial).with_instance_path(instance_path);
            if let Some(comment) = comment {
                device = device.with_comment(comment);
            }
            let count = devauth_cli::add(&file, app_id(&args.app_id)?, device)?;
            debug!("Definition now holds {count} devices");
        }
        Command::List { file } => {
            devauth_cli::list(&file, app_id(&args.app_id)?, &mut stdout)?;
        }
        Command::Show { file, name } => {
            devauth_cli::show(&file, app_id(&args.app_id)?, &name, &mut stdout)?;
        }
        Command::Check {
            file,
            name,
            by,
            external,
        } => {
            let class = if external {
                DiskClass::External
            } else {
                DiskClass::Internal
            };
            let which = match by {
                By::Serial => DiskIdentifier::SerialNumber,
                By::InstancePath => DiskIdentifier::InstancePath,
            };
            let result = devauth_cli::check(
                &file,
                app_id(&args.app_id)?,
                &name,
                class,
                which,
                Arc::new(SystemProvider::new()),
            );
            let status = check_exit_status(&result);
            writeln!(stdout, "{}", result?)?;
            return Ok(status);
        }
        Command::Hash { path, algorithm } => {
            devauth_cli::hash(&path, algorithm, &mut stdout)?;
        }
        Command::Probe => {
            devauth_cli::probe(&SystemProvider::new(), &mut stdout)?;
        }
    }
    Ok(0)
}

fn app_id(app_id: &Option<String>) -> Result<&str> {
    app_id
        .as_deref()
        .context("an application identifier is required (--app-id or DEVAUTH_APP_ID)")
}
