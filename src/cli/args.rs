//! CLI argument definitions using clap derive

use crate::config::Config;
use crate::release::{PlatformType, ReleaseSource};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// oc-release - OpenShift release metadata resolver
///
/// Looks up component images, versions and architecture of an OpenShift
/// release payload and extracts its installer binary, using the oc CLI.
#[derive(Parser, Debug)]
#[command(name = "oc-release")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "OC_RELEASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Release image pull-spec
    #[arg(short = 'r', long, global = true, env = "OC_RELEASE_IMAGE")]
    pub release_image: Option<String>,

    /// Mirror of the release image; preferred when set and pulled insecurely
    #[arg(short, long, global = true, env = "OC_RELEASE_IMAGE_MIRROR")]
    pub mirror: Option<String>,

    /// Registry pull secret file
    #[arg(short, long, global = true, env = "OC_RELEASE_PULL_SECRET")]
    pub pull_secret_file: Option<PathBuf>,

    /// oc binary to run (overrides release.oc_binary)
    #[arg(long, global = true)]
    pub oc_binary: Option<String>,
}

impl Cli {
    /// Release image and mirror given on the command line
    pub fn source(&self) -> ReleaseSource {
        ReleaseSource::from_parts(self.release_image.clone(), self.mirror.clone())
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref oc) = self.oc_binary {
            config.release.oc_binary = oc.clone();
        }
        if let Some(ref path) = self.pull_secret_file {
            config.release.pull_secret_file = Some(path.clone());
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the pull-spec of a named component image
    Image(ImageArgs),

    /// Print the machine-config-operator image
    McoImage,

    /// Print the must-gather image
    MustGatherImage,

    /// Print the full OpenShift version
    Version,

    /// Print the major.minor OpenShift version
    MajorMinor,

    /// Print the release CPU architecture
    Arch(ArchArgs),

    /// Extract the installer binary from the release
    Extract(ExtractArgs),

    /// Check the oc CLI, configuration and pull secret
    Status,

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the image command
#[derive(Parser, Debug)]
pub struct ImageArgs {
    /// Component image name (e.g. machine-config-operator)
    pub name: String,
}

/// Arguments for the arch command
#[derive(Parser, Debug)]
pub struct ArchArgs {
    /// List every architecture of a multi-arch release
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the extract command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Platform the installer is extracted for
    #[arg(long, value_enum, default_value_t = PlatformType::Baremetal)]
    pub platform: PlatformType,

    /// Extraction root (overrides release.cache_dir)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}
