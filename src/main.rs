//! oc-release - OpenShift release metadata resolver
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use oc_release::cli::{commands, Cli, Commands, ReleaseContext};
use oc_release::config::ConfigManager;
use oc_release::error::ReleaseResult;
use oc_release::release::{MCO_IMAGE_NAME, MUST_GATHER_IMAGE_NAME};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ReleaseResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let mut config = config_manager.load().await?;
    cli.apply_overrides(&mut config);

    init_logging(cli.verbose, config.general.json_logs());
    debug!("Using config {}", config_manager.path().display());

    let ctx = ReleaseContext::new(config, cli.source());

    match cli.command {
        Commands::Image(args) => commands::image(&args.name, &ctx).await,
        Commands::McoImage => commands::image(MCO_IMAGE_NAME, &ctx).await,
        Commands::MustGatherImage => commands::image(MUST_GATHER_IMAGE_NAME, &ctx).await,
        Commands::Version => commands::version(&ctx).await,
        Commands::MajorMinor => commands::major_minor(&ctx).await,
        Commands::Arch(args) => commands::arch(args, &ctx).await,
        Commands::Extract(args) => commands::extract(args, &ctx).await,
        Commands::Status => commands::status(&ctx, &config_manager).await,
        Commands::Config(args) => commands::config(args, &config_manager, &ctx.config).await,
    }
}

/// Logs go to stderr so stdout only carries results.
/// 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::new("oc_release=warn"),
        1 => EnvFilter::new("oc_release=info"),
        _ => EnvFilter::new("oc_release=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
