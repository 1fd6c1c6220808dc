use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Receives recoverable problems found while scanning.
///
/// Scanners never log directly; the caller decides where diagnostics go.
pub trait ScanReporter {
    /// Something was skipped (e.g. permission denied) and contributes nothing.
    fn warn(&self, path: &Path, message: &str);

    /// Missing or malformed metadata that a fallback covered.
    fn debug(&self, _path: &Path, _message: &str) {}
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ScanReporter for TracingReporter {
    fn warn(&self, path: &Path, message: &str) {
        tracing::warn!("{}: {}", path.display(), message);
    }

    fn debug(&self, path: &Path, message: &str) {
        tracing::debug!("{}: {}", path.display(), message);
    }
}

/// Keeps warnings in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    warnings: RefCell<Vec<(PathBuf, String)>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<(PathBuf, String)> {
        self.warnings.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }
}

impl ScanReporter for CollectingReporter {
    fn warn(&self, path: &Path, message: &str) {
        self.warnings
            .borrow_mut()
            .push((path.to_path_buf(), message.to_string()));
    }
}
