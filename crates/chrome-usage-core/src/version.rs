//! Ordering for extension version folder names.
//!
//! Chrome keeps one folder per installed version, named like `1.2.3_0`.
//! Plain string comparison gets `10.0` vs `9.0` wrong, so folder names are
//! split into segments and compared numerically where possible.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Numeric(u64),
    Text(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => Segment::Numeric(n),
            Err(_) => Segment::Text(raw.to_string()),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
            _ => self.as_text().cmp(&other.as_text()),
        }
    }

    fn as_text(&self) -> String {
        match self {
            Segment::Numeric(n) => n.to_string(),
            Segment::Text(s) => s.clone(),
        }
    }
}

/// A parsed version folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionVersion {
    raw: String,
    segments: Vec<Segment>,
}

impl ExtensionVersion {
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(['.', '_'])
            .filter(|s| !s.is_empty())
            .map(Segment::parse)
            .collect();

        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Pick the highest of a set of version folder names.
    pub fn highest<'a, I>(names: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .map(|name| (ExtensionVersion::parse(name), name))
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, name)| name)
    }
}

impl Ord for ExtensionVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.segments.iter().zip(&other.segments) {
            match a.compare(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        self.segments
            .len()
            .cmp(&other.segments.len())
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for ExtensionVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
