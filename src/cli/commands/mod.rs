//! CLI command implementations

pub mod arch;
pub mod config;
pub mod extract;
pub mod image;
pub mod status;
pub mod version;

pub use arch::execute as arch;
pub use config::execute as config;
pub use extract::execute as extract;
pub use image::execute as image;
pub use status::execute as status;
pub use version::{execute as version, major_minor};

use crate::config::{read_pull_secret, Config};
use crate::error::{ReleaseError, ReleaseResult};
use crate::release::{ReleaseResolver, ReleaseSource};

/// Everything a release command needs: settings, the release to inspect
/// and a resolver wired to the configured oc binary
pub struct ReleaseContext {
    pub config: Config,
    pub source: ReleaseSource,
    resolver: ReleaseResolver,
}

impl ReleaseContext {
    pub fn new(config: Config, source: ReleaseSource) -> Self {
        let resolver = ReleaseResolver::from_config(&config.release);
        Self {
            config,
            source,
            resolver,
        }
    }

    pub fn resolver(&self) -> &ReleaseResolver {
        &self.resolver
    }

    /// Load the pull secret for a release command
    ///
    /// The release source is checked first so a missing release image is
    /// reported ahead of a missing secret.
    pub async fn pull_secret(&self) -> ReleaseResult<String> {
        self.source.select()?;
        match self.config.release.pull_secret_file {
            Some(ref path) => read_pull_secret(path).await,
            None => Err(ReleaseError::PullSecretMissing),
        }
    }
}
