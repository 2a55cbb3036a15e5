//! Extract command - pull the installer binary out of the release

use crate::cli::args::ExtractArgs;
use crate::cli::commands::ReleaseContext;
use crate::error::ReleaseResult;
use crate::release::Release;
use tracing::debug;

/// Execute the extract command
pub async fn execute(args: ExtractArgs, ctx: &ReleaseContext) -> ReleaseResult<()> {
    let pull_secret = ctx.pull_secret().await?;
    let cache_dir = args
        .cache_dir
        .unwrap_or_else(|| ctx.config.release.cache_dir.clone());
    debug!(platform = %args.platform, "Extracting into {}", cache_dir.display());

    let path = ctx
        .resolver()
        .extract(&ctx.source, &cache_dir, &pull_secret, args.platform)
        .await?;

    println!("{}", path.display());
    Ok(())
}
