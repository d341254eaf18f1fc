//! Data-driven content definitions and loaders.
//!
//! This crate houses the equipment catalog and engine tunables:
//! - Base weapons, weapon mods and weapon cores (RON)
//! - Base armours and armour mods (RON)
//! - Type-lock rows for beam and cone weapons (RON)
//! - Engine configuration (TOML)
//!
//! The same files are embedded at compile time as the built-in content, so a
//! runtime without a data directory still gets the shipped catalog.

pub mod files;

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use builtin::BuiltinContent;
#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, CatalogSources, ConfigLoader, ContentFactory, LoadResult};
