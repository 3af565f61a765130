use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::io::ReadAt;

use super::structures::FileRecord;

/// Copies entry bodies out of a bundle into standalone files
pub struct Extractor<R: ReadAt> {
    source: R,
    out_dir: PathBuf,
}

impl<R: ReadAt> Extractor<R> {
    /// Create an extractor writing into `out_dir`
    pub fn new(source: R, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            out_dir: out_dir.into(),
        }
    }

    /// Where `record` would be written
    pub fn output_path(&self, record: &FileRecord) -> Result<PathBuf> {
        let name = record.display_name();
        if !is_plain_file_name(&name) {
            return Err(Error::InvalidName(name));
        }
        Ok(self.out_dir.join(name))
    }

    /// Read the entry body into memory
    pub fn extract_to_memory(&self, record: &FileRecord) -> io::Result<Vec<u8>> {
        let len = usize::try_from(record.size).map_err(|_| {
            io::Error::new(
                io::ErrorKind::OutOfMemory,
                format!("{} bytes do not fit in memory", record.size),
            )
        })?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(len).map_err(|e| {
            io::Error::new(
                io::ErrorKind::OutOfMemory,
                format!("cannot buffer {} bytes: {}", len, e),
            )
        })?;
        buf.resize(len, 0);

        self.source.read_exact_at(record.offset, &mut buf)?;
        Ok(buf)
    }

    /// Extract the entry to `output_path`, creating or truncating it.
    ///
    /// A partially written output is removed again if anything fails after
    /// the file was created.
    pub fn extract_to_file(&self, record: &FileRecord, output_path: &Path) -> Result<()> {
        let io_err = |source: io::Error| Error::ExtractionIo {
            path: output_path.to_path_buf(),
            source,
        };

        let file = File::create(output_path).map_err(io_err)?;

        if let Err(e) = self.write_body(record, file) {
            if let Err(rm) = fs::remove_file(output_path) {
                warn!(
                    path = %output_path.display(),
                    error = %rm,
                    "could not remove partial output"
                );
            }
            return Err(io_err(e));
        }

        Ok(())
    }

    fn write_body(&self, record: &FileRecord, mut file: File) -> io::Result<()> {
        let data = self.extract_to_memory(record)?;
        file.write_all(&data)?;
        file.sync_all()
    }

    /// Extract `record` into the output directory under its display name.
    ///
    /// Returns the path that was written.
    pub fn extract(&self, record: &FileRecord) -> Result<PathBuf> {
        let output_path = self.output_path(record)?;

        match self.extract_to_file(record, &output_path) {
            Ok(()) => {
                info!(
                    name = %record.display_name(),
                    bytes = record.size,
                    path = %output_path.display(),
                    "extracted entry"
                );
                Ok(output_path)
            }
            Err(e) => {
                warn!(name = %record.display_name(), error = %e, "extraction failed");
                Err(e)
            }
        }
    }
}

/// A single path component that names a regular file in the output directory
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
