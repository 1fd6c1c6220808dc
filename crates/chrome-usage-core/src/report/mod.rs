mod builder;

pub use builder::{DEFAULT_TOP_N, ReportBuilder, build_report};

use crate::model::Profile;
use crate::units::{bytes_to_mb, round_mb};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Filtered, sorted view over one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub profiles: Vec<Profile>,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Profiles included in the report (after filtering).
    pub profile_count: usize,
    /// Sum over included profiles.
    pub total_size_bytes: u64,
    pub min_size_mb: f64,
    pub top_extensions: Vec<TopExtension>,
}

impl Summary {
    pub fn total_size_mb(&self) -> f64 {
        round_mb(bytes_to_mb(self.total_size_bytes))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopExtension {
    pub name: String,
    pub size_bytes: u64,
    pub size_mb: f64,
    pub profile_name: String,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The JSON report: a pretty-printed array of profile objects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.profiles)?)
    }

    /// Parse profiles back out of a JSON report.
    pub fn profiles_from_json(content: &str) -> Result<Vec<Profile>> {
        Ok(serde_json::from_str(content)?)
    }
}
