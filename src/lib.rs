//! Core crate for the `aidfind` terminal directory filter.
//!
//! The filtering and formatting logic lives in [`dataset`], [`filter`], and
//! [`render`], free of any presentation concerns; [`ui`] is the ratatui
//! adapter over the view model those modules produce.

pub mod app_dirs;
pub mod dataset;
pub mod filter;
pub mod logging;
pub mod render;
pub mod types;
pub mod ui;

pub use dataset::{Dataset, DatasetError};
pub use filter::FilterState;
pub use render::{build_blocks, title_case};
pub use types::{FieldLine, LinkKind, OrgBlock, OrgRecord, SessionOutcome};
pub use ui::{App, Theme, run};
