use crate::units::{bytes_to_mb, round_mb};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// One Chrome profile directory and its disk usage.
///
/// Field names on the wire follow the report format (`profile_name`,
/// `profile_dir`, ...), so a serialized `Vec<Profile>` is the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "profile_name")]
    pub name: String,
    #[serde(rename = "profile_dir")]
    pub directory: PathBuf,
    #[serde(rename = "profile_size_bytes")]
    pub size_bytes: u64,
    #[serde(rename = "profile_size_mb")]
    pub size_mb: f64,
    pub extensions: Vec<Extension>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
        size_bytes: u64,
        extensions: Vec<Extension>,
    ) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            size_bytes,
            size_mb: round_mb(bytes_to_mb(size_bytes)),
            extensions,
        }
    }

    /// Largest first, then name ascending.
    pub fn size_order(&self, other: &Self) -> Ordering {
        size_order(self.size_bytes, &self.name, other.size_bytes, &other.name)
    }
}

/// An installed extension, aggregated over all of its version folders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    #[serde(rename = "extension_name")]
    pub name: String,
    #[serde(rename = "extension_dir")]
    pub directory: PathBuf,
    #[serde(rename = "extension_size_bytes")]
    pub size_bytes: u64,
    #[serde(rename = "extension_size_mb")]
    pub size_mb: f64,
    /// Name of the owning profile, for reporting only.
    pub profile_name: String,
    /// Version folder the name was resolved from.
    #[serde(skip)]
    pub version: String,
}

impl Extension {
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
        size_bytes: u64,
        profile_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            size_bytes,
            size_mb: round_mb(bytes_to_mb(size_bytes)),
            profile_name: profile_name.into(),
            version: String::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn size_order(&self, other: &Self) -> Ordering {
        size_order(self.size_bytes, &self.name, other.size_bytes, &other.name)
    }
}

/// Descending by size; equal sizes ordered by name ascending.
pub fn size_order(a_size: u64, a_name: &str, b_size: u64, b_name: &str) -> Ordering {
    b_size.cmp(&a_size).then_with(|| a_name.cmp(b_name))
}

/// Sort extensions the way every report lists them.
pub fn sort_extensions(extensions: &mut [Extension]) {
    extensions.sort_by(|a, b| a.size_order(b));
}
