use clap::Parser;
use std::path::PathBuf;

use crate::models::SortOrder;
use crate::utils::SizeFormat;

/// Count files, directories and per-extension sizes under a directory.
#[derive(Debug, Parser)]
#[command(name = "dirstat", version, about)]
pub struct Cli {
    /// Directory (or file) to scan
    pub root: PathBuf,

    /// Order of the extension block: key, count, count-asc, size, size-asc
    #[arg(long, value_name = "ORDER")]
    pub sort: Option<SortOrder>,

    /// Size rendering: decimal, binary or raw
    #[arg(long, value_name = "FORMAT")]
    pub sizes: Option<SizeFormat>,

    /// Settings file to use instead of the one in the config directory
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
