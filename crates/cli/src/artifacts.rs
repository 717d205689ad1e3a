use crate::load_config;
use ecamap_project::DependencyGraphWalker;
use std::path::PathBuf;
use tracing::info;

pub fn run(project: PathBuf, config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config.as_ref())?;
    let report = DependencyGraphWalker::new(config.walker).walk(&project)?;

    info!(
        "{} projects visited, {} artifacts",
        report.projects.len(),
        report.artifacts.len()
    );
    for artifact in &report.artifacts {
        println!("{}", artifact.display());
    }
    Ok(())
}
