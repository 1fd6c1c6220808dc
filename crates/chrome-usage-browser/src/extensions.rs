use crate::names::NameResolver;
use crate::reporter::ScanReporter;
use crate::size::SizeCalculator;
use chrome_usage_core::model::sort_extensions;
use chrome_usage_core::{Extension, ExtensionVersion};
use std::fs;
use std::path::{Path, PathBuf};

/// Builds [`Extension`] records from `<profile>/Extensions/<id>/<version>/`.
pub struct ExtensionScanner<'a> {
    reporter: &'a dyn ScanReporter,
}

impl<'a> ExtensionScanner<'a> {
    pub fn new(reporter: &'a dyn ScanReporter) -> Self {
        Self { reporter }
    }

    /// All extensions installed in a profile, largest first.
    ///
    /// Sizes add up every version folder left on disk; the name comes from the
    /// highest version. Ids without any version folder are skipped.
    pub fn scan_extensions(&self, profile_dir: &Path, profile_name: &str) -> Vec<Extension> {
        let extensions_dir = profile_dir.join("Extensions");
        if !extensions_dir.is_dir() {
            return Vec::new();
        }

        let mut extensions: Vec<Extension> = subdirectories(&extensions_dir, self.reporter)
            .into_iter()
            .filter_map(|extension_dir| self.scan_extension(&extension_dir, profile_name))
            .collect();

        sort_extensions(&mut extensions);

        tracing::debug!(
            "Found {} extensions in {}",
            extensions.len(),
            profile_dir.display()
        );

        extensions
    }

    fn scan_extension(&self, extension_dir: &Path, profile_name: &str) -> Option<Extension> {
        let versions = subdirectories(extension_dir, self.reporter);
        if versions.is_empty() {
            tracing::debug!("Skipping {}: no version folders", extension_dir.display());
            return None;
        }

        let calculator = SizeCalculator::new(self.reporter);
        let size_bytes = versions.iter().map(|v| calculator.total_size(v)).sum();

        let version_names: Vec<String> = versions
            .iter()
            .filter_map(|v| v.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect();
        let latest = ExtensionVersion::highest(version_names.iter().map(String::as_str))?;

        let name = NameResolver::new(self.reporter).resolve_extension_name(extension_dir, latest);

        Some(Extension::new(name, extension_dir, size_bytes, profile_name).with_version(latest))
    }
}

/// Immediate subdirectories, sorted by path. Symlinks are not followed.
pub(crate) fn subdirectories(dir: &Path, reporter: &dyn ScanReporter) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            reporter.warn(dir, &format!("could not list directory: {e}"));
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .map(|entry| entry.path())
        .collect();
    dirs.sort();
    dirs
}
