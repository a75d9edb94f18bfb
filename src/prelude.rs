//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use rock_report::prelude::*;
//! ```

// Core
pub use crate::core::clock::{Clock, FixedClock, SystemClock};
pub use crate::core::config::Config;
pub use crate::core::errors::{Result, RockrError};

// Loader
pub use crate::loader::discovery::InputLocator;
pub use crate::loader::model::{Band, BandDataset};

// Report
pub use crate::pipeline::RunOutcome;
pub use crate::report::aggregate::{SubsetStats, aggregate};
pub use crate::report::builder::{REPORT_MESSAGE, BandSummary, Report, ReportStatistics, build_report};
pub use crate::report::filter::filter_by_rating;
pub use crate::report::writer::{report_file_name, write_report};
