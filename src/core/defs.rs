//! Definitions document (baseimage_defs.yaml) parsing
//!
//! The document declares the supported architectures and the flavor matrix
//! (OS -> variants + releases). Mapping order is significant: every listing
//! command emits entries in document order, so all maps are `IndexMap`.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::DefsError;

/// File name of the definitions document, looked up next to the executable
pub const DEFS_FILE_NAME: &str = "baseimage_defs.yaml";

/// Root of the definitions document
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Definitions {
    /// Supported architectures, document order
    pub architectures: IndexMap<String, ArchRecord>,

    /// Supported operating systems, document order
    pub flavors: IndexMap<String, OsRecord>,
}

/// Per-architecture override record
///
/// An empty record is valid; every field falls back to the architecture's
/// own name.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ArchRecord {
    /// Per-OS base-image architecture aliases
    #[serde(default)]
    pub baseimage_arch: IndexMap<String, String>,

    /// C-library architecture alias
    #[serde(default)]
    pub glibc_arch: Option<String>,

    /// Emulator architecture alias
    #[serde(default)]
    pub qemu_arch: Option<String>,
}

/// Per-OS record
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OsRecord {
    /// Build recipe identifier for this OS
    pub dockerfile: String,

    /// Declared variants, document order (the OS itself is implicit)
    #[serde(default)]
    pub variants: Vec<String>,

    /// Releases, document order
    pub releases: IndexMap<String, ReleaseRecord>,
}

/// Per-release record
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReleaseRecord {
    /// Upstream base image tag for this release
    pub baseimage: String,
}

impl ArchRecord {
    /// Base-image architecture for `os`, falling back to `arch` itself
    pub fn baseimage_arch_for<'a>(&'a self, os: &str, arch: &'a str) -> &'a str {
        self.baseimage_arch.get(os).map_or(arch, String::as_str)
    }

    /// C-library architecture, falling back to `arch` itself
    pub fn glibc_arch_or<'a>(&'a self, arch: &'a str) -> &'a str {
        self.glibc_arch.as_deref().unwrap_or(arch)
    }

    /// Emulator architecture, falling back to `arch` itself
    pub fn qemu_arch_or<'a>(&'a self, arch: &'a str) -> &'a str {
        self.qemu_arch.as_deref().unwrap_or(arch)
    }
}

impl FromStr for Definitions {
    type Err = DefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_yaml::from_str(s)?)
    }
}

impl Definitions {
    /// Load the definitions document from `path`
    pub fn load(path: &Path) -> Result<Self, DefsError> {
        tracing::debug!(path = %path.display(), "loading definitions");
        let content = fs::read_to_string(path).map_err(|source| DefsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Default document location: next to the program executable, with
    /// symlinks resolved. Not configurable; the document is installed
    /// alongside the binary.
    pub fn default_path() -> Result<PathBuf, DefsError> {
        let exe = std::env::current_exe()
            .and_then(fs::canonicalize)
            .map_err(|source| DefsError::ExeLocation { source })?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(DEFS_FILE_NAME))
    }

    /// Look up an architecture record, erroring on undeclared names
    pub fn architecture(&self, name: &str) -> Result<&ArchRecord, DefsError> {
        self.architectures
            .get(name)
            .ok_or_else(|| DefsError::UnknownArchitecture {
                name: name.to_string(),
            })
    }

    /// Resolved emulator architecture for `arch`
    pub fn qemu_arch<'a>(&'a self, arch: &'a str) -> Result<&'a str, DefsError> {
        Ok(self.architecture(arch)?.qemu_arch_or(arch))
    }
}
