//! Release image / mirror selection

use crate::error::{ReleaseError, ReleaseResult};

/// The release image and optional mirror a caller wants metadata from
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSource {
    /// Primary release image pull-spec
    pub image: Option<String>,

    /// Mirror serving the same release content
    pub mirror: Option<String>,
}

/// The pull-spec chosen for one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedRelease<'a> {
    /// Pull-spec to hand to the release tool
    pub pull_spec: &'a str,

    /// Skip TLS verification (set for mirrors)
    pub insecure: bool,
}

impl SelectedRelease<'_> {
    /// Whether the mirror was chosen
    pub fn is_mirror(&self) -> bool {
        self.insecure
    }
}

impl ReleaseSource {
    /// Source with only a primary release image
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            mirror: None,
        }
    }

    /// Source with only a mirror
    pub fn mirror_only(mirror: impl Into<String>) -> Self {
        Self {
            image: None,
            mirror: Some(mirror.into()),
        }
    }

    /// Source built from optional parts
    pub fn from_parts(image: Option<String>, mirror: Option<String>) -> Self {
        Self { image, mirror }
    }

    /// Add a mirror
    pub fn with_mirror(mut self, mirror: impl Into<String>) -> Self {
        self.mirror = Some(mirror.into());
        self
    }

    /// Pick the pull-spec to use
    ///
    /// A mirror always wins and is contacted insecurely; otherwise the
    /// primary image is used securely.
    pub fn select(&self) -> ReleaseResult<SelectedRelease<'_>> {
        if let Some(mirror) = non_empty(&self.mirror) {
            return Ok(SelectedRelease {
                pull_spec: mirror,
                insecure: true,
            });
        }
        if let Some(image) = non_empty(&self.image) {
            return Ok(SelectedRelease {
                pull_spec: image,
                insecure: false,
            });
        }
        Err(ReleaseError::MissingReleaseImage)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
