//! Read-only access to a Chrome user-data directory.
//!
//! Everything here recovers from per-item problems (missing files, bad JSON,
//! unreadable directories) and only fails when the data directory itself is
//! unusable.

mod data_dir;
mod error;
mod extensions;
mod json;
mod names;
mod profiles;
mod reporter;
mod size;

pub use data_dir::{ChromeDataDir, DATA_DIR_ENV};
pub use error::{Error, Result};
pub use extensions::ExtensionScanner;
pub use names::{LocalState, NameResolver};
pub use profiles::{LOCAL_STATE_FILE, PREFERENCES_FILE, ProfileScanner, is_profile_dir_name};
pub use reporter::{CollectingReporter, ScanReporter, TracingReporter};
pub use size::SizeCalculator;
