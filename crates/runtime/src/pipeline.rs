//! Walker → loader → scanner → emitter.
//!
//! All fatal failures surface before the output file is touched.

use crate::config::EcamapConfig;
use crate::error::{Result, RuntimeError};
use ecamap_api::{ModuleLoader, ModuleMetadata};
use ecamap_core::{DiagnosticSink, MetadataScanner, RegistryEmitter};
use ecamap_project::{DependencyGraphWalker, artifacts::list_artifacts};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Root project descriptor
    pub project: PathBuf,
    /// Destination of the generated registry source
    pub output: PathBuf,
    /// Directory of always-included artifacts (not recursive)
    pub extra_dir: Option<PathBuf>,
    /// One more artifact appended last
    pub extra_file: Option<PathBuf>,
    pub config: EcamapConfig,
}

impl GenerateRequest {
    pub fn new(project: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            output: output.into(),
            extra_dir: None,
            extra_file: None,
            config: EcamapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub modules: usize,
    pub entries: usize,
    pub failures: usize,
}

/// Ordered artifact list: walked project outputs, then the extra
/// directory, then the extra file. Extras are not deduplicated.
pub fn resolve_artifacts(request: &GenerateRequest) -> Result<Vec<PathBuf>> {
    let walker = DependencyGraphWalker::new(request.config.walker.clone());
    let mut artifacts = walker.walk(&request.project)?.artifacts;

    if let Some(dir) = &request.extra_dir {
        let extras = list_artifacts(dir, walker.config())?;
        debug!("{} extra artifacts from {}", extras.len(), dir.display());
        artifacts.extend(extras);
    }
    if let Some(file) = &request.extra_file {
        artifacts.push(file.clone());
    }
    Ok(artifacts)
}

/// Load every artifact in order. The first failure aborts.
pub fn load_modules(
    loader: &dyn ModuleLoader,
    artifacts: &[PathBuf],
) -> Result<Vec<Box<dyn ModuleMetadata>>> {
    artifacts
        .iter()
        .map(|path| {
            loader.load(path).map_err(|source| RuntimeError::Load {
                path: path.clone(),
                source,
            })
        })
        .collect()
}

pub fn generate(
    request: &GenerateRequest,
    loader: &dyn ModuleLoader,
    sink: DiagnosticSink,
) -> Result<GenerateSummary> {
    request.config.scan.validate()?;

    let artifacts = resolve_artifacts(request)?;
    info!("Resolved {} artifacts from {}", artifacts.len(), request.project.display());

    let modules = load_modules(loader, &artifacts)?;
    let report = MetadataScanner::new(&request.config.scan)
        .with_sink(sink)
        .scan(&modules);

    RegistryEmitter::new(request.config.emit.clone()).emit(&report.entries, &request.output)?;

    Ok(GenerateSummary {
        output: request.output.clone(),
        modules: modules.len(),
        entries: report.entries.len(),
        failures: report.failures.len(),
    })
}
