use super::{Report, Summary, TopExtension};
use crate::model::{Extension, Profile, size_order, sort_extensions};
use crate::{Error, Result};

/// Number of extensions listed in the summary by default.
pub const DEFAULT_TOP_N: usize = 5;

/// Turns scanned profiles into a filtered, sorted [`Report`].
///
/// The input slice is never modified; the report owns filtered copies.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    min_size_mb: f64,
    top_n: usize,
}

impl ReportBuilder {
    pub fn new(min_size_mb: f64) -> Result<Self> {
        if !min_size_mb.is_finite() || min_size_mb < 0.0 {
            return Err(Error::InvalidThreshold(min_size_mb));
        }

        Ok(Self {
            min_size_mb,
            top_n: DEFAULT_TOP_N,
        })
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn min_size_mb(&self) -> f64 {
        self.min_size_mb
    }

    pub fn build(&self, profiles: &[Profile]) -> Report {
        tracing::debug!(
            "Building report for {} profiles (threshold {:.2} MB)",
            profiles.len(),
            self.min_size_mb
        );

        let mut included: Vec<Profile> = profiles
            .iter()
            .filter(|p| p.size_mb >= self.min_size_mb)
            .map(|p| {
                let mut extensions: Vec<Extension> = p
                    .extensions
                    .iter()
                    .filter(|e| e.size_mb >= self.min_size_mb)
                    .cloned()
                    .collect();
                sort_extensions(&mut extensions);

                Profile {
                    extensions,
                    ..p.clone()
                }
            })
            .collect();
        included.sort_by(|a, b| a.size_order(b));

        let summary = Summary {
            profile_count: included.len(),
            total_size_bytes: included.iter().map(|p| p.size_bytes).sum(),
            min_size_mb: self.min_size_mb,
            top_extensions: self.top_extensions(profiles),
        };

        tracing::info!(
            "Report complete: {} of {} profiles at or above {:.2} MB",
            summary.profile_count,
            profiles.len(),
            self.min_size_mb
        );

        Report {
            profiles: included,
            summary,
        }
    }

    /// Global largest extensions across every scanned profile, unfiltered.
    fn top_extensions(&self, profiles: &[Profile]) -> Vec<TopExtension> {
        let mut all: Vec<&Extension> = profiles.iter().flat_map(|p| &p.extensions).collect();
        all.sort_by(|a, b| size_order(a.size_bytes, &a.name, b.size_bytes, &b.name));

        all.into_iter()
            .take(self.top_n)
            .map(|e| TopExtension {
                name: e.name.clone(),
                size_bytes: e.size_bytes,
                size_mb: e.size_mb,
                profile_name: e.profile_name.clone(),
            })
            .collect()
    }
}

/// Build a report with the default top-N.
pub fn build_report(profiles: &[Profile], min_size_mb: f64) -> Result<Report> {
    Ok(ReportBuilder::new(min_size_mb)?.build(profiles))
}
