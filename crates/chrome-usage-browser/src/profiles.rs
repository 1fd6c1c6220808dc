use crate::extensions::{ExtensionScanner, subdirectories};
use crate::names::{LocalState, NameResolver};
use crate::reporter::ScanReporter;
use crate::size::SizeCalculator;
use crate::{Error, Result};
use chrome_usage_core::Profile;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

pub const LOCAL_STATE_FILE: &str = "Local State";
pub const PREFERENCES_FILE: &str = "Preferences";

lazy_static! {
    static ref PROFILE_DIR_NAME: Regex = Regex::new(r"^(Default|Profile \d+)$").unwrap();
}

/// `Default` or `Profile <N>`.
pub fn is_profile_dir_name(name: &str) -> bool {
    PROFILE_DIR_NAME.is_match(name)
}

/// Walks the user-data root and builds one [`Profile`] per profile directory.
pub struct ProfileScanner<'a> {
    reporter: &'a dyn ScanReporter,
}

impl<'a> ProfileScanner<'a> {
    pub fn new(reporter: &'a dyn ScanReporter) -> Self {
        Self { reporter }
    }

    /// Scan every profile under `root_dir`, in directory-name order.
    ///
    /// A directory counts as a profile when it is named like one or holds a
    /// `Preferences` file. Only a missing root is an error.
    pub fn scan_profiles(&self, root_dir: &Path) -> Result<Vec<Profile>> {
        if !root_dir.is_dir() {
            return Err(Error::DataDirNotFound(root_dir.to_path_buf()));
        }

        tracing::info!("Scanning Chrome profiles in {}", root_dir.display());

        let local_state = LocalState::load(&root_dir.join(LOCAL_STATE_FILE), self.reporter);
        tracing::debug!(
            "Local State lists {} profiles",
            local_state.profile_count()
        );

        let profiles: Vec<Profile> = subdirectories(root_dir, self.reporter)
            .into_iter()
            .filter(|dir| self.is_profile_dir(dir))
            .map(|dir| self.scan_profile(&dir, &local_state))
            .collect();

        tracing::info!("Scanned {} profiles", profiles.len());
        Ok(profiles)
    }

    fn is_profile_dir(&self, dir: &Path) -> bool {
        let named_like_profile = dir
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_profile_dir_name);

        if named_like_profile || dir.join(PREFERENCES_FILE).is_file() {
            return true;
        }

        self.reporter
            .debug(dir, "not a profile directory (no Preferences file)");
        false
    }

    fn scan_profile(&self, dir: &Path, local_state: &LocalState) -> Profile {
        let name = NameResolver::new(self.reporter).resolve_profile_name(dir, local_state);
        let size_bytes = SizeCalculator::new(self.reporter).total_size(dir);
        let extensions = ExtensionScanner::new(self.reporter).scan_extensions(dir, &name);

        tracing::debug!(
            "Profile {} ({}): {} bytes, {} extensions",
            name,
            dir.display(),
            size_bytes,
            extensions.len()
        );

        Profile::new(name, dir, size_bytes, extensions)
    }
}
