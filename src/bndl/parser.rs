//! Bundle file table parser.
//!
//! A bundle is read front to back:
//! 1. The fixed-size header carries the signature, version and entry count
//! 2. The file table follows immediately, one fixed-size entry per file
//! 3. Entry bodies live anywhere after that, addressed by offset and size
//!
//! Only the header and the table are read while opening; bodies are fetched
//! on demand by the [`Extractor`](super::Extractor).

use std::io::Cursor;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::error::Error;
use crate::io::ReadAt;

use super::structures::*;

/// Low-level bundle parser over any [`ReadAt`] source.
pub struct BndlParser<R: ReadAt> {
    /// The underlying data source
    reader: R,
    /// Total size of the bundle in bytes
    size: u64,
}

impl<R: ReadAt> BndlParser<R> {
    pub fn new(reader: R) -> Self {
        let size = reader.size();
        Self { reader, size }
    }

    /// Read and validate the bundle header.
    pub fn read_header(&self) -> Result<BundleHeader> {
        if self.size < BundleHeader::SIZE as u64 {
            bail!(
                "File too small to be a bundle ({} bytes, header needs {})",
                self.size,
                BundleHeader::SIZE
            );
        }

        let mut buf = [0u8; BundleHeader::SIZE];
        self.reader
            .read_exact_at(0, &mut buf)
            .context("Could not read bundle header")?;
        BundleHeader::from_bytes(&buf)
    }

    /// Read the whole file table.
    ///
    /// Every record is checked against the source length, so callers may rely
    /// on `offset + size` never running past the end of the bundle.
    pub fn list_files(&self) -> Result<ArchiveTable> {
        let header = self.read_header()?;

        let table_end = BundleHeader::SIZE as u64 + header.table_len();
        if table_end > self.size {
            bail!(
                "File table of {} entries runs past the end of the bundle",
                header.file_count
            );
        }

        // Read the entire table in one go
        let mut table = vec![0u8; header.table_len() as usize];
        self.reader
            .read_exact_at(BundleHeader::SIZE as u64, &mut table)
            .context("Could not read file table")?;

        let mut records = Vec::with_capacity(header.file_count as usize);
        let mut cursor = Cursor::new(table.as_slice());

        for index in 0..header.file_count {
            let record = FileRecord::read_from(&mut cursor)?;
            match record.end() {
                Some(end) if end <= self.size => {}
                _ => bail!(
                    "Entry {} ({}) spans {}+{} bytes, beyond the bundle's {} bytes",
                    index,
                    record.display_name(),
                    record.offset,
                    record.size,
                    self.size
                ),
            }
            records.push(record);
        }

        debug!(count = records.len(), "parsed file table");
        Ok(ArchiveTable::new(records))
    }
}

/// Open a bundle: validate its structure and return its file table.
///
/// Any structural problem is reported as [`Error::ArchiveOpen`].
pub fn open<R: ReadAt + ?Sized>(source: &R) -> std::result::Result<ArchiveTable, Error> {
    BndlParser::new(source)
        .list_files()
        .map_err(|e| Error::ArchiveOpen(format!("{:#}", e)))
}
