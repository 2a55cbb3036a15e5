//! Image command - print a component image of the release

use crate::cli::commands::ReleaseContext;
use crate::error::ReleaseResult;
use crate::release::Release;

/// Execute the image command
pub async fn execute(name: &str, ctx: &ReleaseContext) -> ReleaseResult<()> {
    let pull_secret = ctx.pull_secret().await?;
    let image = ctx
        .resolver()
        .get_named_image(name, &ctx.source, &pull_secret)
        .await?;

    println!("{}", image);
    Ok(())
}
