use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the log filter, in `tracing` directive syntax
pub const LOG_ENV: &str = "BNDLVIEW_LOG";

#[derive(Parser, Debug)]
#[command(name = "bndlview")]
#[command(version)]
#[command(about = "Browse a BNDL bundle's file table and extract entries", long_about = None)]
#[command(after_help = "Keys:\n  \
  Up/Down    move the selection (wraps around)\n  \
  x          extract the selected entry\n  \
  q          quit")]
pub struct Cli {
    /// Bundle file to open
    #[arg(value_name = "BUNDLE")]
    pub file: PathBuf,

    /// Write extracted files into DIR instead of the current directory
    #[arg(short = 'd', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write diagnostics to FILE (filter with BNDLVIEW_LOG, default "info")
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Bundle file name without its directories, for the table's title
    pub fn title(&self) -> String {
        self.file
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file.display().to_string())
    }
}
