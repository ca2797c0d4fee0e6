//! Configuration loading and resolution.
//!
//! Values are layered from default config file locations, `AIDFIND__`
//! environment variables, and CLI overrides, then validated into a
//! [`ResolvedConfig`]. `load` is the entry point.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
