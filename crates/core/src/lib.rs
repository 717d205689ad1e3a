pub mod config;
pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod key;
pub mod logging;
pub mod matcher;
pub mod naming;
pub mod scanner;

pub use config::{EmitConfig, ScanConfig};
pub use diagnostics::{DiagnosticSink, ScanFailure, ScanUnit};
pub use emitter::RegistryEmitter;
pub use error::{EcaError, Result};
pub use scanner::{MetadataScanner, ScanReport, ScanStats};
