//! BNDL bundle reading and extraction.
//!
//! ## Architecture
//!
//! - [`structures`]: on-disk layout constants, the header, [`FileRecord`] and
//!   [`ArchiveTable`]
//! - [`parser`]: validation and decoding of the header and file table
//! - [`extractor`]: copying one entry's body into a standalone file
//!
//! ## Bundle Format Overview
//!
//! All integers are little-endian.
//!
//! ```text
//! offset  size  field
//! 0       4     signature "BNDL"
//! 4       2     version (1)
//! 6       2     flags (ignored)
//! 8       4     file count
//! 12      4     reserved
//! 16      24*n  file table: name[12] ext[4] size:u32 offset:u32
//! ...           entry bodies
//! ```
//!
//! Name and extension are NUL-padded; a field filling its capacity has no
//! terminator. An empty extension means the entry has none.

mod extractor;
mod parser;
mod structures;

pub use extractor::Extractor;
pub use parser::{BndlParser, open};
pub use structures::*;
