//! oc-release - OpenShift release metadata resolver
//!
//! Resolves component images, versions and architecture of an OpenShift
//! release payload and extracts its installer binary by driving the `oc`
//! CLI. Named image lookups are memoized per release with single-flight
//! semantics; extraction retries with a fixed delay.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod release;

pub use error::{ReleaseError, ReleaseResult};
pub use release::{Release, ReleaseResolver, ReleaseSource};
