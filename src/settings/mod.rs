//! Configuration loading and resolution.
//!
//! `load` is the entry point and returns a [`ResolvedConfig`] for the
//! workflow. Sources are layered lowest first: default files, `--config`
//! files, `ICONPICK__*` environment variables, then CLI flags.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
