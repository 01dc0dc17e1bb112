mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use bx_add::model::config::InstallerConfig;
use bx_add::model::file_tree::DiskTree;
use bx_add::{InstallOptions, install_into};
use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _guard = match init_logging(cli.verbose) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("bx-add: logging disabled: {err}");
            None
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("install failed: {err:#}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Log to a daily file under the data dir, never stdout.
fn init_logging(verbose: bool) -> Result<WorkerGuard> {
    let log_dir = directories::ProjectDirs::from("", "", "bx-add")
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("bx-add"));
    std::fs::create_dir_all(&log_dir)?;

    let default_filter = if verbose { "bx_add=debug" } else { "bx_add=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_appender = tracing_appender::rolling::daily(&log_dir, "bx-add.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("{err}"))?;

    Ok(guard)
}

fn run(cli: Cli) -> Result<()> {
    tracing::info!("bx-add starting in {}", cli.path.display());

    let config = InstallerConfig::load()?;
    let options = InstallOptions {
        project: cli.project,
        skip: cli.skip.into_iter().map(Into::into).collect(),
    };

    let mut tree = DiskTree::new(cli.path);
    let report = install_into(&mut tree, &options, &config)?;

    for line in report.messages() {
        println!("{line}");
    }

    Ok(())
}
