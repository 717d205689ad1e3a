mod artifacts;
mod generate;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecamap",
    version,
    about = "Generates the ECA method registry from compiled modules",
    long_about = "ecamap walks a project's reference graph, collects the compiled modules it \
                  produces, finds every method marked as an Action or Checker and writes a \
                  static lookup table mapping keys to reflective method handles."
)]
pub struct Cli {
    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan modules and write the registry source file
    Generate(GenerateArgs),
    /// Print the artifacts resolved from a project's reference graph
    #[command(
        long_about = "Walks the project reference graph exactly like `generate` does and prints \
                            the deduplicated artifact paths, one per line, in load order."
    )]
    Artifacts {
        /// Root project descriptor
        #[arg(short, long, value_name = "PROJECT")]
        project: PathBuf,

        /// JSON configuration file
        #[arg(long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Output file path
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Root project descriptor
    #[arg(short, long, value_name = "PROJECT")]
    pub project: PathBuf,

    /// Directory of engine artifacts that are always loaded
    #[arg(short, long, value_name = "DIR")]
    pub engine: PathBuf,

    /// One more artifact loaded last
    #[arg(short = 't', long = "eca", value_name = "FILE")]
    pub eca: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Marker kind, highest priority first. Replaces the configured kinds.
    #[arg(long = "marker", value_name = "KIND")]
    pub markers: Vec<String>,

    /// Leave the generation timestamp out of the header
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Generate(_) => "generate",
        Commands::Artifacts { .. } => "artifacts",
    };
    let _guard = ecamap_runtime::init_logging(component, cli.verbose);

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Artifacts { project, config } => artifacts::run(project, config),
    }
}

fn load_config(path: Option<&PathBuf>) -> ecamap_runtime::Result<ecamap_runtime::EcamapConfig> {
    match path {
        Some(path) => ecamap_runtime::EcamapConfig::from_file(path),
        None => Ok(ecamap_runtime::EcamapConfig::default()),
    }
}
