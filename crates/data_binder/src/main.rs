// crates/data_binder/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};

use data_binder::{run_gen_base_classes, run_process_resources};
use gen_base_classes_options::GenBaseClassesOptions;
use process_resources_options::ProcessResourcesOptions;

#[derive(Parser, Debug)]
#[command(
    name = "data-binder",
    version,
    about = "This binary can be used to either process xml resources or generate \
             base classes for data binding.",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process Android resources
    #[command(name = "PROCESS_RESOURCES")]
    ProcessResources(ProcessResourcesOptions),

    /// Generate the base classes and class info from layout files
    #[command(name = "GEN_BASE_CLASSES")]
    GenBaseClasses(GenBaseClassesOptions),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::ProcessResources(options) => run_process_resources(&options),
        Command::GenBaseClasses(options) => run_gen_base_classes(&options),
    }
}
