//! Release metadata provider abstraction
//!
//! Callers (API handlers, reconcilers, the CLI) depend on this trait rather
//! than on [`ReleaseResolver`](super::ReleaseResolver) so they can be driven
//! by a stub in their own tests.

use crate::error::ReleaseResult;
use crate::release::commands::{MCO_IMAGE_NAME, MUST_GATHER_IMAGE_NAME};
use crate::release::platform::PlatformType;
use crate::release::source::ReleaseSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Abstract release metadata interface
///
/// Every operation picks the mirror when one is supplied (insecurely) and
/// the primary image otherwise, and fails before running anything when
/// neither is set.
#[async_trait]
pub trait Release: Send + Sync {
    /// Pull-spec of the image named `image_name` inside the release payload
    async fn get_named_image(
        &self,
        image_name: &str,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<String>;

    /// Pull-spec of the machine-config-operator image
    async fn get_mco_image(&self, source: &ReleaseSource, pull_secret: &str) -> ReleaseResult<String> {
        self.get_named_image(MCO_IMAGE_NAME, source, pull_secret)
            .await
    }

    /// Pull-spec of the must-gather image
    async fn get_must_gather_image(
        &self,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<String> {
        self.get_named_image(MUST_GATHER_IMAGE_NAME, source, pull_secret)
            .await
    }

    /// Full OpenShift version of the release
    async fn get_openshift_version(
        &self,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<String>;

    /// `"<major>.<minor>"` of the release version
    async fn get_major_minor_version(
        &self,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<String>;

    /// CPU architecture of the release image
    async fn get_release_architecture(
        &self,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<String>;

    /// Every CPU architecture a (possibly multi-arch) release image covers
    async fn get_release_architectures(
        &self,
        source: &ReleaseSource,
        pull_secret: &str,
    ) -> ReleaseResult<Vec<String>>;

    /// Extract the installer binary for `platform` under `cache_dir`
    async fn extract(
        &self,
        source: &ReleaseSource,
        cache_dir: &Path,
        pull_secret: &str,
        platform: PlatformType,
    ) -> ReleaseResult<PathBuf>;
}
