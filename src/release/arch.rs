//! CPU architecture extraction from `oc image info` output

use crate::error::{ReleaseError, ReleaseResult};
use serde_json::Value;

/// Canonical name of the x86-64 architecture
pub const DEFAULT_CPU_ARCHITECTURE: &str = "x86_64";

/// Map a registry-reported architecture to the canonical name
///
/// Only `amd64` is renamed; every other value passes through unchanged.
pub fn normalize_architecture(arch: &str) -> String {
    match arch {
        "amd64" => DEFAULT_CPU_ARCHITECTURE.to_string(),
        other => other.to_string(),
    }
}

/// Read `config.architecture` from a single image-info JSON document
pub fn parse_image_architecture(image_info: &str) -> ReleaseResult<String> {
    let info = parse_json(image_info)?;
    architecture_of(&info).map(normalize_architecture)
}

/// Read every architecture from image-info JSON
///
/// Accepts a single document or an array of documents (one per manifest
/// list entry). Duplicates are dropped, first-seen order is kept.
pub fn parse_image_architectures(image_info: &str) -> ReleaseResult<Vec<String>> {
    let info = parse_json(image_info)?;

    let mut architectures: Vec<String> = Vec::new();
    let documents = match &info {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    for document in documents {
        let arch = normalize_architecture(architecture_of(document)?);
        if !architectures.contains(&arch) {
            architectures.push(arch);
        }
    }

    if architectures.is_empty() {
        return Err(ReleaseError::ArchitectureParse(
            "image info lists no images".to_string(),
        ));
    }

    Ok(architectures)
}

fn parse_json(image_info: &str) -> ReleaseResult<Value> {
    serde_json::from_str(image_info)
        .map_err(|e| ReleaseError::ArchitectureParse(format!("invalid image info JSON: {}", e)))
}

fn architecture_of(info: &Value) -> ReleaseResult<&str> {
    info.pointer("/config/architecture")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ReleaseError::ArchitectureParse("config.architecture not found in image info".to_string())
        })
}
