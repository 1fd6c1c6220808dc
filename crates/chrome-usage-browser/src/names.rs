//! Friendly names for profiles and extensions.
//!
//! Profiles: `Preferences` `profile.name`, then the shared `Local State` info
//! cache, then the account names Chrome keeps in either file, then the
//! directory name. Extensions: `manifest.json` of one version folder, with
//! `__MSG_key__` placeholders looked up in `_locales`, then the extension id.
//! Every lookup that fails simply moves on to the next source.

use crate::json::{load_json, non_empty_str};
use crate::reporter::ScanReporter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const MSG_PREFIX: &str = "__MSG_";
const MSG_SUFFIX: &str = "__";
const FALLBACK_LOCALE: &str = "en";
const ACCOUNT_NAME_KEYS: [&str; 2] = ["gaia_name", "user_name"];

/// The `profile.info_cache` section of `Local State`, parsed once per scan.
#[derive(Debug, Clone, Default)]
pub struct LocalState {
    info_cache: Map<String, Value>,
}

impl LocalState {
    pub fn load(path: &Path, reporter: &dyn ScanReporter) -> Self {
        load_json(path, reporter)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    pub fn from_value(value: Value) -> Self {
        let info_cache = value
            .get("profile")
            .and_then(|p| p.get("info_cache"))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Self { info_cache }
    }

    pub fn profile_count(&self) -> usize {
        self.info_cache.len()
    }

    /// `info_cache[dir_name].name` for a profile directory (`"Profile 1"`, ...).
    pub fn profile_name(&self, dir_name: &str) -> Option<&str> {
        non_empty_str(self.info_cache.get(dir_name)?, &["name"])
    }

    /// Signed-in account name (`gaia_name`, then `user_name`).
    pub fn account_name(&self, dir_name: &str) -> Option<&str> {
        let details = self.info_cache.get(dir_name)?;

        ACCOUNT_NAME_KEYS
            .into_iter()
            .find_map(|key| non_empty_str(details, &[key]))
    }
}

pub struct NameResolver<'a> {
    reporter: &'a dyn ScanReporter,
}

impl<'a> NameResolver<'a> {
    pub fn new(reporter: &'a dyn ScanReporter) -> Self {
        Self { reporter }
    }

    /// Preferences `profile.name`, then Local State `name`, then account
    /// names from either file, then the directory name.
    pub fn resolve_profile_name(&self, profile_dir: &Path, local_state: &LocalState) -> String {
        let dir_name = dir_name(profile_dir);
        let prefs = load_json(&profile_dir.join("Preferences"), self.reporter);

        if let Some(name) = prefs
            .as_ref()
            .and_then(|p| non_empty_str(p, &["profile", "name"]))
        {
            tracing::debug!("Profile {} named from Preferences: {}", dir_name, name);
            return name.to_string();
        }

        if let Some(name) = local_state.profile_name(&dir_name) {
            tracing::debug!("Profile {} named from Local State: {}", dir_name, name);
            return name.to_string();
        }

        let account = prefs
            .as_ref()
            .and_then(account_from_preferences)
            .or_else(|| local_state.account_name(&dir_name).map(str::to_string));
        if let Some(name) = account {
            tracing::debug!("Profile {} named from account info: {}", dir_name, name);
            return name;
        }

        tracing::debug!("No friendly name for {}, using directory name", dir_name);
        dir_name
    }

    /// Name from `<extension_dir>/<version>/manifest.json`, or the extension id.
    pub fn resolve_extension_name(&self, extension_dir: &Path, version: &str) -> String {
        let extension_id = dir_name(extension_dir);
        let version_dir = extension_dir.join(version);

        let Some(manifest) = load_json(&version_dir.join("manifest.json"), self.reporter) else {
            return extension_id;
        };

        let Some(raw_name) = non_empty_str(&manifest, &["name"])
            .or_else(|| non_empty_str(&manifest, &["default_title"]))
        else {
            self.reporter
                .debug(&version_dir, "manifest has no name, using extension id");
            return extension_id;
        };

        if !raw_name.starts_with(MSG_PREFIX) {
            return raw_name.to_string();
        }

        let default_locale =
            non_empty_str(&manifest, &["default_locale"]).unwrap_or(FALLBACK_LOCALE);

        match self.resolve_placeholder(raw_name, &version_dir, default_locale) {
            Some(resolved) => {
                tracing::debug!("Resolved {} => {}", raw_name, resolved);
                resolved
            }
            None => {
                self.reporter.debug(
                    &version_dir,
                    &format!("could not resolve {raw_name}, using extension id"),
                );
                extension_id
            }
        }
    }

    /// Look up `__MSG_key__` in `_locales/<locale>/messages.json`.
    ///
    /// Locales are tried as: `default_locale`, `en`, then the rest in name
    /// order. If the full key is nowhere to be found, the part before the
    /// first underscore is tried (`name_releasebuild` -> `name`).
    fn resolve_placeholder(
        &self,
        placeholder: &str,
        version_dir: &Path,
        default_locale: &str,
    ) -> Option<String> {
        let key = placeholder
            .strip_prefix(MSG_PREFIX)?
            .strip_suffix(MSG_SUFFIX)
            .filter(|k| !k.is_empty())?;

        let locales_dir = version_dir.join("_locales");
        if !locales_dir.is_dir() {
            return None;
        }

        let tables: Vec<Value> = locale_order(&locales_dir, default_locale)
            .iter()
            .filter_map(|locale| {
                load_json(&locales_dir.join(locale).join("messages.json"), self.reporter)
            })
            .collect();

        let find = |key: &str| tables.iter().find_map(|table| lookup_message(table, key));

        find(key).or_else(|| {
            let (prefix, _) = key.split_once('_')?;
            find(prefix)
        })
    }
}

/// Account name from `Preferences`: `profile.gaia_name`, `profile.user_name`,
/// or the single `account_info` entry as "Full Name (email)".
fn account_from_preferences(prefs: &Value) -> Option<String> {
    if let Some(name) = ACCOUNT_NAME_KEYS
        .into_iter()
        .find_map(|key| non_empty_str(prefs, &["profile", key]))
    {
        return Some(name.to_string());
    }

    let accounts = prefs.get("account_info")?.as_array()?;
    let [account] = accounts.as_slice() else {
        return None;
    };

    let full_name = non_empty_str(account, &["full_name"]);
    let email = non_empty_str(account, &["email"]);

    match (full_name, email) {
        (Some(full_name), Some(email)) => Some(format!("{full_name} ({email})")),
        (Some(full_name), None) => Some(full_name.to_string()),
        (None, Some(email)) => Some(email.to_string()),
        (None, None) => None,
    }
}

/// `messages.<key>.message`, matching the key exactly first and then
/// case-insensitively.
fn lookup_message(table: &Value, key: &str) -> Option<String> {
    if let Some(message) = non_empty_str(table, &[key, "message"]) {
        return Some(message.to_string());
    }

    table
        .as_object()?
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .and_then(|(_, entry)| non_empty_str(entry, &["message"]))
        .map(str::to_string)
}

fn locale_order(locales_dir: &Path, default_locale: &str) -> Vec<String> {
    let mut order = vec![default_locale.to_string()];
    if default_locale != FALLBACK_LOCALE {
        order.push(FALLBACK_LOCALE.to_string());
    }

    let mut rest: Vec<String> = fs::read_dir(locales_dir)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| !order.contains(name))
        .collect();
    rest.sort();

    order.extend(rest);
    order
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
