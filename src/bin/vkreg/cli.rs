//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use vkreg::RefKind;

/// vkreg - generates guarded Vulkan device dispatch code from vk.xml
#[derive(Parser)]
#[command(name = "vkreg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the device dispatch table header and loader source
    DispatchTable(DispatchTableArgs),

    /// Generate the context dispatcher mixin header
    ContextDispatcher(HeaderArgs),

    /// Generate the structure type lookup header
    Stype(HeaderArgs),

    /// Print resolved guard expressions as JSON
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct DispatchTableArgs {
    /// Registry document (vk.xml)
    pub registry: PathBuf,

    /// Output header path
    pub header: PathBuf,

    /// Output source path
    pub source: PathBuf,
}

#[derive(Args)]
pub struct HeaderArgs {
    /// Registry document (vk.xml)
    pub registry: PathBuf,

    /// Output header path
    pub header: PathBuf,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Registry document (vk.xml)
    pub registry: PathBuf,

    /// Which references to resolve
    #[arg(value_enum)]
    pub kind: InspectKind,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InspectKind {
    Commands,
    Types,
}

impl From<InspectKind> for RefKind {
    fn from(kind: InspectKind) -> Self {
        match kind {
            InspectKind::Commands => RefKind::Command,
            InspectKind::Types => RefKind::Type,
        }
    }
}
