//! `oc`-backed release metadata resolver

use crate::config::ReleaseConfig;
use crate::error::{ReleaseError, ReleaseResult};
use crate::exec::{run_with_pull_secret, CommandLine, Executer, ProcessExecuter};
use crate::release::arch;
use crate::release::cache::{CacheKey, ImageCache};
use crate::release::commands::{self, DEFAULT_TOOL};
use crate::release::platform::PlatformType;
use crate::release::provider::Release;
use crate::release::retry::{fixed_delay, RetryOutcome, RetryPolicy};
use crate::release::source::{ReleaseSource, SelectedRelease};
use crate::release::version;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, error, info};

/// Release metadata resolver running `oc` through an [`Executer`]
///
/// Cheap to share behind an `Arc`. The image cache can be injected so
/// several resolvers (or a test) control which lookups are shared.
pub struct ReleaseResolver {
    executer: Arc<dyn Executer>,
    tool: String,
    retry: RetryPolicy,
    images: Arc<ImageCache>,
}

impl ReleaseResolver {
    /// Create a resolver with its own empty image cache
    pub fn new(executer: Arc<dyn Executer>, retry: RetryPolicy) -> Self {
        Self {
            executer,
            tool: DEFAULT_TOOL.to_string(),
            retry,
            images: Arc::new(ImageCache::new()),
        }
    }

    /// Create a resolver that spawns real processes as configured
    pub fn from_config(config: &ReleaseConfig) -> Self {
        let executer = ProcessExecuter::new().with_temp_dir(config.temp_dir.clone());
        Self::new(Arc::new(executer), config.retry_policy()).with_tool(config.oc_binary.clone())
    }

    /// Use a different release tool binary
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Share an existing image cache
    pub fn with_cache(mut self, cache: Arc<ImageCache>) -> Self {
        self.images = cache;
        self
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn cache(&self) -> &Arc<ImageCache> {
        &self.images
    }

    async fn run(&self, pull_secret: &str, command: &CommandLine) -> ReleaseResult<String> {
        run_with_pull_secret(self.executer.as_ref(), pull_secret, command).await
    }

    /// Look up `image_name` in `release_image`, memoized per image and release
    pub async fn image_from_release(
        &self,
        image_name: &str,
        release_image: &str,
        pull_secret: &str,
        insecure: bool,
    ) -> ReleaseResult<String> {
        let key = CacheKey::new(image_name, release_image);
        self.images
            .resolve(&key, || async move {
                let command = commands::image_for(&self.tool, image_name, insecure, release_image);
                info!("Fetching image from OCP release ({})", command);
                self.run(pull_secret, &command).await
            })
            .await
    }

    async fn version_from_release(
        &self,
        release_image: &str,
        pull_secret: &str,
        insecure: bool,
    ) -> ReleaseResult<String> {
        let command = commands::version(&self.tool, insecure, release_image);
        let version = self.run(pull_secret, &command).await?;
        // The template argument is quoted, so the tool echoes the quotes back.
        Ok(version.trim_matches('\'').to_string())
    }

    /// Extract the installer binary for `platform` from `release_image`
    ///
    /// The binary lands in `cache_dir/release_image`. The returned outcome
    /// records how many extraction attempts were made; zero means the work
    /// directory could not be created.
    pub async fn extract_from_release(
        &self,
        release_image: &str,
        cache_dir: &Path,
        pull_secret: &str,
        insecure: bool,
        platform: PlatformType,
    ) -> RetryOutcome<PathBuf> {
        let binary = platform.installer_binary();
        let workdir = workdir_for(cache_dir, release_image);
        info!("extracting {} binary to {}", binary, workdir.display());

        if let Err(e) = fs::create_dir_all(&workdir).await {
            return RetryOutcome {
                result: Err(ReleaseError::io(
                    format!("creating extraction directory {}", workdir.display()),
                    e,
                )),
                attempts: 0,
            };
        }

        let command = commands::extract(&self.tool, binary, &workdir, insecure, release_image);
        let command = &command;
        let outcome = fixed_delay(&self.retry, |attempt| async move {
            debug!(attempt, "Running extraction");
            self.run(pull_secret, command).await
        })
        .await;

        let result = outcome.result.map(|_| {
            let path = workdir.join(binary);
            info!(
                "Successfully extracted {} binary from the release to: {}",
                binary,
                path.display()
            );
            path
        });

        RetryOutcome {
            result,
            attempts: outcome.attempts,
        }
    }
}

/// `cache_dir/release_image`, keeping registry paths nested under the cache
fn workdir_for(cache_dir: &Path, release_image: &str) -> PathBuf {
    cache_dir.join(release_image.trim_start_matches('/'))
}

fn log_failure(err: &ReleaseError, action: &str, selected: &SelectedRelease<'_>) {
    let origin = if selected.is_mirror() {
        "mirror release image"
    } else {
        "release image"
    };
    error!(
        error = %err,
        release_image = selected.pull_spec,
        mirror = selected.is_mirror(),
        "failed to {} from {} {}",
        action,
        origin,
        selected.pull_spec
    );
}

#[async_trait]
impl Release for ReleaseResolver {
    async fn get_named_image(
        &self,
        image_name: &str,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<String> {
        let selected = source.select()?;
        self.image_from_release(image_name, selected.pull_spec, pull_secret, selected.insecure)
            .await
            .inspect_err(|err| {
                log_failure(err, &format!("get {} image", image_name), &selected)
            })
    }

    async fn get_openshift_version(
        &self,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<String> {
        let selected = source.select()?;
        self.version_from_release(selected.pull_spec, pull_secret, selected.insecure)
            .await
            .inspect_err(|err| log_failure(err, "get image openshift version", &selected))
    }

    async fn get_major_minor_version(
        &self,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<String> {
        let full = self.get_openshift_version(source, pull_secret).await?;
        version::major_minor(&full)
    }

    async fn get_release_architecture(
        &self,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<String> {
        let selected = source.select()?;
        let command = commands::image_info(&self.tool, selected.pull_spec);
        let info = self
            .run(pull_secret, &command)
            .await
            .inspect_err(|err| log_failure(err, "get release architecture", &selected))?;
        arch::parse_image_architecture(&info)
    }

    async fn get_release_architectures(
        &self,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<Vec<String>> {
        let selected = source.select()?;
        let command = commands::image_info_multiarch(&self.tool, selected.pull_spec);
        let info = self
            .run(pull_secret, &command)
            .await
            .inspect_err(|err| log_failure(err, "get release architectures", &selected))?;
        arch::parse_image_architectures(&info)
    }

    async fn extract(
        &self,
        source: &ReleaseSource,
        cache_dir: &Path,
        pull_secret: &str,
        platform: PlatformType,
    ) -> ReleaseResult<PathBuf> {
        let selected = source.select()?;
        let outcome = self
            .extract_from_release(
                selected.pull_spec,
                cache_dir,
                pull_secret,
                selected.insecure,
                platform,
            )
            .await;
        outcome.into_result().inspect_err(|err| {
            log_failure(
                err,
                &format!("extract {}", platform.installer_binary()),
                &selected,
            )
        })
    }
}
