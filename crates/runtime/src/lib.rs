pub mod config;
pub mod error;
pub mod pipeline;

pub use config::EcamapConfig;
pub use error::{Result, RuntimeError};
pub use pipeline::{GenerateRequest, GenerateSummary, generate, load_modules, resolve_artifacts};

/// The module loader used when the caller does not bring its own.
pub fn default_loader() -> Box<dyn ecamap_api::ModuleLoader> {
    Box::new(ecamap_loader::JsonModuleLoader::new())
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(ecamap_core::logging::init_logging(component, to_stderr))
}
