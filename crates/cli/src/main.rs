use anyhow::Context;
use clap::Parser;
use pipeline::RunOptions;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lombokify")]
#[command(about = "Add Lombok annotations to Java entities and DTOs", long_about = None)]
struct Cli {
    /// Root of the Java source tree, walked recursively.
    #[arg(env = "LOMBOKIFY_ROOT", default_value = "src/main/java")]
    root: PathBuf,
    /// Report the files that would change without writing them.
    #[arg(long)]
    dry_run: bool,
    /// Log per-file decisions to stderr (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    // Loaded before parsing so LOMBOKIFY_ROOT can come from .env.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("could not load .env: {e}");
        }
    }

    let opts = RunOptions {
        dry_run: cli.dry_run,
    };
    let label = if cli.dry_run { "Would update" } else { "Updated" };

    let report = pipeline::run(&cli.root, &opts, |path| {
        println!("{label}: {}", path.display());
    })
    .with_context(|| format!("cannot process source root {}", cli.root.display()))?;

    if report.failed > 0 {
        warn!(failed = report.failed, "some files were skipped because of errors");
    }

    println!();
    if cli.dry_run {
        println!("Total files to update: {}", report.updated_count());
    } else {
        println!("Total files updated: {}", report.updated_count());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
