//! OpenShift version parsing
//!
//! Release payloads report versions such as `4.6.0` or
//! `4.6.0-0.nightly-2020-08-31-220837`, and older tooling sometimes yields a
//! bare `4.6`. Accepted grammar:
//!
//! ```text
//! v? N(.N)* ( -IDENTS | -?[A-Za-z~-]IDENTS )? ( +IDENTS )?
//! IDENTS = [0-9A-Za-z~-]+ ( . [0-9A-Za-z~-]+ )*
//! ```
//!
//! Missing numeric segments read as zero. Identifiers may carry leading
//! zeros.

use crate::error::{ReleaseError, ReleaseResult};

/// A parsed release version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    segments: Vec<u64>,
    prerelease: String,
    metadata: String,
}

impl ReleaseVersion {
    pub fn major(&self) -> u64 {
        self.segment(0)
    }

    pub fn minor(&self) -> u64 {
        self.segment(1)
    }

    pub fn patch(&self) -> u64 {
        self.segment(2)
    }

    /// Pre-release part without its leading dash, empty when absent
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Build metadata after `+`, empty when absent
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    fn segment(&self, idx: usize) -> u64 {
        self.segments.get(idx).copied().unwrap_or(0)
    }
}

/// Parse a release version string
pub fn parse_version(raw: &str) -> ReleaseResult<ReleaseVersion> {
    let trimmed = raw.trim();
    let text = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let (core, rest) = split_core(text);
    if core.is_empty() {
        return Err(ReleaseError::version_parse(raw, "missing numeric segments"));
    }

    let segments = core
        .split('.')
        .map(|segment| {
            segment
                .parse::<u64>()
                .map_err(|e| ReleaseError::version_parse(raw, format!("segment '{}': {}", segment, e)))
        })
        .collect::<ReleaseResult<Vec<u64>>>()?;

    let (pre, build) = match rest.split_once('+') {
        Some((pre, build)) => (pre, Some(build)),
        None => (rest, None),
    };

    let mut prerelease = String::new();
    if !pre.is_empty() {
        // Digits right after the core belong to it, so `pre` is dash-led or
        // letter-led here.
        if pre.starts_with('.') {
            return Err(ReleaseError::version_parse(
                raw,
                format!("unexpected '{}' after numeric segments", pre),
            ));
        }
        check_identifiers(raw, pre, "pre-release")?;
        prerelease = match pre.strip_prefix('-') {
            Some(stripped) if !stripped.is_empty() => stripped.to_string(),
            _ => pre.to_string(),
        };
    }

    let mut metadata = String::new();
    if let Some(build) = build {
        check_identifiers(raw, build, "build metadata")?;
        metadata = build.to_string();
    }

    Ok(ReleaseVersion {
        segments,
        prerelease,
        metadata,
    })
}

/// Reduce a release version to `"<major>.<minor>"`
pub fn major_minor(raw: &str) -> ReleaseResult<String> {
    let version = parse_version(raw)?;
    Ok(format!("{}.{}", version.major(), version.minor()))
}

/// Split off the dot-separated numeric core: digits, then `.digits` runs
fn split_core(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let mut end = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if end == 0 {
        return ("", text);
    }
    while end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    text.split_at(end)
}

fn check_identifiers(raw: &str, idents: &str, what: &str) -> ReleaseResult<()> {
    for ident in idents.split('.') {
        if ident.is_empty() {
            return Err(ReleaseError::version_parse(
                raw,
                format!("empty {} identifier", what),
            ));
        }
        if let Some(c) = ident
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '~'))
        {
            return Err(ReleaseError::version_parse(
                raw,
                format!("unexpected character '{}' in {}", c, what),
            ));
        }
    }
    Ok(())
}
