use crate::reporter::ScanReporter;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a small JSON metadata file.
///
/// Missing files and parse failures both come back as `None`. The file handle
/// is dropped before returning on every path.
pub(crate) fn load_json(path: &Path, reporter: &dyn ScanReporter) -> Option<Value> {
    if !path.is_file() {
        reporter.debug(path, "JSON file not found");
        return None;
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            reporter.debug(path, &format!("could not open JSON file: {e}"));
            return None;
        }
    };

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(value) => Some(value),
        Err(e) => {
            reporter.debug(path, &format!("malformed JSON: {e}"));
            None
        }
    }
}

/// Follow a key path into a JSON value and return a non-empty string.
pub(crate) fn non_empty_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .try_fold(value, |current, key| current.get(key))?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
