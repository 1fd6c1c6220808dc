pub mod error;
pub mod model;
pub mod report;
pub mod units;
pub mod version;

pub use error::{Error, Result};
pub use model::{Extension, Profile};
pub use report::{Report, ReportBuilder, Summary, TopExtension, build_report};
pub use version::ExtensionVersion;
