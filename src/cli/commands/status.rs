//! Status command - check the oc CLI, configuration and pull secret

use crate::cli::commands::ReleaseContext;
use crate::config::ConfigManager;
use crate::error::ReleaseResult;
use crate::exec::{Executer, ProcessExecuter};
use console::{style, Emoji};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "[FAIL] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Execute the status command
pub async fn execute(ctx: &ReleaseContext, manager: &ConfigManager) -> ReleaseResult<()> {
    println!("{}", style("oc-release Status").bold().cyan());
    println!();

    let mut all_ok = true;

    println!("{}", style("oc CLI:").bold());
    all_ok &= check_oc(&ctx.config.release.oc_binary).await;

    println!();
    println!("{}", style("Configuration:").bold());
    if manager.path().exists() {
        println!("  {} Loaded from {}", CHECK, manager.path().display());
    } else {
        println!(
            "  {} No config at {} (using defaults)",
            WARN,
            manager.path().display()
        );
    }
    println!(
        "  {} Cache directory: {}",
        CHECK,
        ctx.config.release.cache_dir.display()
    );
    println!(
        "  {} Extraction: {} tries, {}s apart",
        CHECK, ctx.config.release.max_tries, ctx.config.release.retry_delay_secs
    );

    println!();
    println!("{}", style("Pull secret:").bold());
    match ctx.config.release.pull_secret_file {
        Some(ref path) if path.is_file() => {
            println!("  {} {}", CHECK, path.display());
        }
        Some(ref path) => {
            println!("  {} {} not found", CROSS, path.display());
            all_ok = false;
        }
        None => {
            println!(
                "  {} Not configured - pass --pull-secret-file or set release.pull_secret_file",
                WARN
            );
        }
    }

    println!();
    println!("{}", style("Release:").bold());
    match ctx.source.select() {
        Ok(selected) if selected.is_mirror() => {
            println!("  {} Mirror: {} (insecure)", CHECK, selected.pull_spec);
        }
        Ok(selected) => println!("  {} Image: {}", CHECK, selected.pull_spec),
        Err(_) => println!(
            "  {} No release image - pass --release-image or --mirror",
            WARN
        ),
    }

    println!();
    if all_ok {
        println!("{}", style("All critical checks passed").green().bold());
    } else {
        println!(
            "{}",
            style("Some checks failed - see above for details").yellow().bold()
        );
    }

    Ok(())
}

async fn check_oc(oc_binary: &str) -> bool {
    let args = ["version".to_string(), "--client".to_string()];
    match ProcessExecuter::new().execute(oc_binary, &args).await {
        Ok(output) if output.success() => {
            let version = output.stdout.lines().next().unwrap_or("").trim().to_string();
            println!("  {} {} {}", CHECK, oc_binary, style(version).dim());
            true
        }
        Ok(output) => {
            println!(
                "  {} {} exited with code {}",
                CROSS, oc_binary, output.exit_code
            );
            false
        }
        Err(_) => {
            println!("  {} {} not found", CROSS, style(oc_binary).red());
            println!(
                "    Install: {}",
                style("https://mirror.openshift.com/pub/openshift-v4/clients/ocp/").cyan()
            );
            false
        }
    }
}
