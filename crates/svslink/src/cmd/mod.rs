use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod params;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a JSON command into request frames.
    Encode(EncodeArgs),
    /// Reassemble and decode notification chunks.
    Decode(DecodeArgs),
    /// List the register map.
    Params(ParamsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Params(args) => params::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Command as JSON, e.g. '{"command":"set_volume","db":-20}'.
    pub command: String,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hex-encoded notification chunks, in arrival order.
    #[arg(conflicts_with = "file")]
    pub chunks: Vec<String>,
    /// Read chunks from a file, one hex chunk per line.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ParamsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
