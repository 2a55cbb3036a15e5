//! Arch command - print the release CPU architecture

use crate::cli::args::ArchArgs;
use crate::cli::commands::ReleaseContext;
use crate::error::ReleaseResult;
use crate::release::Release;

/// Execute the arch command
pub async fn execute(args: ArchArgs, ctx: &ReleaseContext) -> ReleaseResult<()> {
    let pull_secret = ctx.pull_secret().await?;
    let resolver = ctx.resolver();

    if args.all {
        for arch in resolver
            .get_release_architectures(&ctx.source, &pull_secret)
            .await?
        {
            println!("{}", arch);
        }
    } else {
        let arch = resolver
            .get_release_architecture(&ctx.source, &pull_secret)
            .await?;
        println!("{}", arch);
    }

    Ok(())
}
