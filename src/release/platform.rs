//! Platform types and the installer binary they require

use clap::ValueEnum;
use std::fmt;

/// Installer binary used for platform `none`
pub const INSTALL_BINARY: &str = "openshift-install";

/// Installer binary used for every other platform
pub const BAREMETAL_INSTALL_BINARY: &str = "openshift-baremetal-install";

/// Infrastructure platform a cluster is installed on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum PlatformType {
    #[default]
    Baremetal,
    None,
    Vsphere,
    Nutanix,
    External,
    Oci,
}

impl PlatformType {
    /// Installer binary to extract for this platform
    ///
    /// Platform `none` is also how non-x86_64 clusters are installed, and
    /// those need the generic installer.
    pub fn installer_binary(&self) -> &'static str {
        match self {
            Self::None => INSTALL_BINARY,
            _ => BAREMETAL_INSTALL_BINARY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baremetal => "baremetal",
            Self::None => "none",
            Self::Vsphere => "vsphere",
            Self::Nutanix => "nutanix",
            Self::External => "external",
            Self::Oci => "oci",
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
