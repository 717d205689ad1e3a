use crate::{GenerateArgs, load_config};
use ecamap_core::DiagnosticSink;
use ecamap_runtime::GenerateRequest;
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(args.config.as_ref())?;
    if !args.markers.is_empty() {
        config.scan.marker_kinds = args.markers;
    }
    if !args.no_timestamp && config.emit.header_comment.is_none() {
        config.emit.header_comment = Some(format!(
            "Generated at: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
    }

    println!("Output File Path: {}", args.output.display());
    println!("Project Path: {}", args.project.display());

    let request = GenerateRequest {
        project: args.project,
        output: args.output,
        extra_dir: Some(args.engine),
        extra_file: args.eca,
        config,
    };

    let sink = DiagnosticSink::new(|line| println!("{}", line));
    let loader = ecamap_runtime::default_loader();
    let summary = ecamap_runtime::generate(&request, loader.as_ref(), sink)?;

    info!(
        "Generated {} entries from {} modules into {} ({} units skipped)",
        summary.entries,
        summary.modules,
        summary.output.display(),
        summary.failures
    );
    Ok(())
}
