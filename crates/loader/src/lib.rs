//! Metadata host backed by JSON metadata dumps.
//!
//! A dump describes one compiled module: its types, their methods, the
//! methods' parameter types and markers. Decoding is deferred to the
//! enumeration that needs it, so a malformed entry fails only the unit
//! that enumerates it.

pub mod dump;
pub mod loader;

pub use dump::JsonModule;
pub use loader::JsonModuleLoader;
