//! Version commands - print the release version

use crate::cli::commands::ReleaseContext;
use crate::error::ReleaseResult;
use crate::release::Release;

/// Execute the version command
pub async fn execute(ctx: &ReleaseContext) -> ReleaseResult<()> {
    let pull_secret = ctx.pull_secret().await?;
    let version = ctx
        .resolver()
        .get_openshift_version(&ctx.source, &pull_secret)
        .await?;

    println!("{}", version);
    Ok(())
}

/// Execute the major-minor command
pub async fn major_minor(ctx: &ReleaseContext) -> ReleaseResult<()> {
    let pull_secret = ctx.pull_secret().await?;
    let version = ctx
        .resolver()
        .get_major_minor_version(&ctx.source, &pull_secret)
        .await?;

    println!("{}", version);
    Ok(())
}
