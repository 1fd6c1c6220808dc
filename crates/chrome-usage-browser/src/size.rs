use crate::reporter::ScanReporter;
use std::path::Path;
use walkdir::WalkDir;

/// Sums regular file sizes under a directory tree.
pub struct SizeCalculator<'a> {
    reporter: &'a dyn ScanReporter,
}

impl<'a> SizeCalculator<'a> {
    pub fn new(reporter: &'a dyn ScanReporter) -> Self {
        Self { reporter }
    }

    /// Total bytes of every regular file under `path`.
    ///
    /// Symlinks are not followed and count as zero. Unreadable entries are
    /// reported and skipped. A missing path is 0.
    pub fn total_size(&self, path: &Path) -> u64 {
        if !path.exists() {
            return 0;
        }

        let mut total = 0u64;

        for entry in WalkDir::new(path).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let at = e.path().unwrap_or(path);
                    self.reporter.warn(at, &format!("skipped unreadable entry: {e}"));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => total += metadata.len(),
                Err(e) => self
                    .reporter
                    .warn(entry.path(), &format!("could not read file size: {e}")),
            }
        }

        total
    }
}
