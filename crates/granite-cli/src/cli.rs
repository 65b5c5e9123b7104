use clap::{Args, Parser, Subcommand};
use granite::workflows::pair_energy::ResidueSpecifier;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Granite Maintainers",
    version,
    about = "Granite CLI - Generates CMake build fragments for a large C++ molecular-modeling codebase and cross-checks its pairwise energy terms.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate CMake project and test fragments from a settings directory.
    Generate(GenerateArgs),
    /// Compare pairwise-summed atom energies against a direct residue-pair evaluation.
    PairEnergy(PairEnergyArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory holding *.project.toml and *.test.toml descriptors.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub settings: PathBuf,

    /// Root directory the generated fragments are written under.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output: PathBuf,

    /// Optional emitter configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the prefix prepended to every emitted source path.
    #[arg(long, value_name = "PREFIX")]
    pub source_prefix: Option<String>,

    /// Override the "build all libraries" target executables depend on.
    #[arg(long, value_name = "TARGET")]
    pub libs_target: Option<String>,

    /// Override the post-build symlink helper script path.
    #[arg(long, value_name = "PATH")]
    pub symlink_script: Option<String>,
}

/// Arguments for the `pair-energy` subcommand.
#[derive(Args, Debug)]
pub struct PairEnergyArgs {
    /// Path to the input molecular structure file (BGF format).
    #[arg(long, required = true, value_name = "PATH")]
    pub structure: PathBuf,

    /// Path to the non-bonded forcefield parameter file in TOML format.
    #[arg(long, required = true, value_name = "PATH")]
    pub forcefield: PathBuf,

    /// Path to the solvation parameter table in CSV format.
    #[arg(long, required = true, value_name = "PATH")]
    pub solvation: PathBuf,

    /// First residue of the pair, as '<chain>:<number>' (e.g. 'A:275').
    #[arg(long, required = true, value_name = "CHAIN:NUM")]
    pub first: ResidueSpecifier,

    /// Second residue of the pair, as '<chain>:<number>' (e.g. 'A:55').
    #[arg(long, required = true, value_name = "CHAIN:NUM")]
    pub second: ResidueSpecifier,
}
