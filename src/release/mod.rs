//! Release metadata resolution
//!
//! Turns a release image reference into component image pull-specs, its
//! version and architecture, and an extracted installer binary, all by
//! running `oc` through an [`Executer`](crate::exec::Executer).
//!
//! Named-image lookups are memoized per `(image, release)` in an
//! [`ImageCache`]; version and architecture lookups always run the tool.
//! Extraction is retried with a fixed delay.

pub mod arch;
mod cache;
pub mod commands;
mod platform;
mod provider;
mod resolver;
mod retry;
mod source;
pub mod version;

pub use arch::{normalize_architecture, DEFAULT_CPU_ARCHITECTURE};
pub use cache::{CacheKey, ImageCache};
pub use commands::{DEFAULT_TOOL, MCO_IMAGE_NAME, MUST_GATHER_IMAGE_NAME};
pub use platform::{PlatformType, BAREMETAL_INSTALL_BINARY, INSTALL_BINARY};
pub use provider::Release;
pub use resolver::ReleaseResolver;
pub use retry::{fixed_delay, RetryOutcome, RetryPolicy, DEFAULT_RETRY_DELAY, DEFAULT_TRIES};
pub use source::{ReleaseSource, SelectedRelease};
pub use version::major_minor;
