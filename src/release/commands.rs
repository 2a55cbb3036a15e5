//! `oc` command templates
//!
//! Flag spelling and argument order are part of the tool's CLI contract.
//! Each template produces the same tokens that splitting the textual form on
//! single spaces would, including the quoted version template.

use crate::exec::CommandLine;
use std::path::Path;

/// Default release tool
pub const DEFAULT_TOOL: &str = "oc";

/// Release payload name of the machine-config-operator image
pub const MCO_IMAGE_NAME: &str = "machine-config-operator";

/// Release payload name of the must-gather image
pub const MUST_GATHER_IMAGE_NAME: &str = "must-gather";

/// `<tool> adm release info --image-for=<name> --insecure=<bool> <release>`
pub fn image_for(tool: &str, image_name: &str, insecure: bool, release_image: &str) -> CommandLine {
    CommandLine::new(tool)
        .args(["adm", "release", "info"])
        .arg(format!("--image-for={}", image_name))
        .arg(format!("--insecure={}", insecure))
        .arg(release_image)
}

/// `<tool> adm release info -o template --template '{{.metadata.version}}' --insecure=<bool> <release>`
pub fn version(tool: &str, insecure: bool, release_image: &str) -> CommandLine {
    CommandLine::new(tool)
        .args(["adm", "release", "info", "-o", "template", "--template"])
        .arg("'{{.metadata.version}}'")
        .arg(format!("--insecure={}", insecure))
        .arg(release_image)
}

/// `<tool> adm release extract --command=<binary> --to=<dir> --insecure=<bool> <release>`
pub fn extract(
    tool: &str,
    binary: &str,
    workdir: &Path,
    insecure: bool,
    release_image: &str,
) -> CommandLine {
    CommandLine::new(tool)
        .args(["adm", "release", "extract"])
        .arg(format!("--command={}", binary))
        .arg(format!("--to={}", workdir.display()))
        .arg(format!("--insecure={}", insecure))
        .arg(release_image)
}

/// `<tool> image info --output json <release>`
pub fn image_info(tool: &str, release_image: &str) -> CommandLine {
    CommandLine::new(tool)
        .args(["image", "info", "--output", "json"])
        .arg(release_image)
}

/// `<tool> image info --show-multiarch --output json <release>`
pub fn image_info_multiarch(tool: &str, release_image: &str) -> CommandLine {
    CommandLine::new(tool)
        .args(["image", "info", "--show-multiarch", "--output", "json"])
        .arg(release_image)
}
