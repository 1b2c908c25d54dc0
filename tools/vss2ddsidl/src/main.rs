mod commands;
mod format;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{export::ExportArgs, structs::StructsArgs, tree::TreeArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "vss2ddsidl",
    about = "Convert vehicle signal specification trees to DDS IDL"
)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a DDS IDL file from a signal tree
    Export(ExportArgs),
    /// Print the consolidated struct records of a signal tree
    Structs(StructsArgs),
    /// Print the outline of a signal tree
    Tree(TreeArgs),
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Export(args) => args.run(),
        Commands::Structs(args) => args.run(),
        Commands::Tree(args) => args.run(),
    }
}
