//! Terminal adapter: three panes (categories, assistance types, results)
//! over the filtering core, driven by a synchronous event loop.

mod app;
mod panes;
pub mod theme;

pub use app::{App, run};
pub use theme::Theme;
