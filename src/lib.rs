//! # bndlview
//!
//! An interactive terminal browser for BNDL bundle archives.
//!
//! The bundle's file table is shown as a bordered table of name, size and
//! offset. The arrow keys move the selection (wrapping at both ends), `x`
//! copies the selected entry's bytes into a standalone file named after it,
//! and `q` quits.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use bndlview::{Extractor, LocalFileReader, open};
//!
//! fn main() -> anyhow::Result<()> {
//!     let reader = LocalFileReader::new(Path::new("assets.bndl"))?;
//!     let table = open(&reader)?;
//!     for record in table.records() {
//!         println!("{} {} {}", record.display_name(), record.size, record.offset);
//!     }
//!
//!     let extractor = Extractor::new(&reader, ".");
//!     if let Some(first) = table.get(0) {
//!         extractor.extract(first)?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod bndl;
pub mod cli;
pub mod error;
pub mod io;
pub mod ui;

pub use bndl::{ArchiveTable, Extractor, FileRecord, open};
pub use cli::Cli;
pub use error::{Error, Result};
pub use io::{LocalFileReader, ReadAt};
pub use ui::Session;
