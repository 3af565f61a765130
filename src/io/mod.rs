mod local;
mod memory;

pub use local::LocalFileReader;

use std::io::{Error, ErrorKind, Result};

/// Trait for random access reading from a backing source
pub trait ReadAt {
    /// Read data at the specified offset into the buffer
    ///
    /// Returns the number of bytes read, which may be less than `buf.len()`.
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize>;

    /// Get the total size of the data source
    fn size(&self) -> u64;

    /// Fill `buf` completely from `offset`.
    ///
    /// Fails with [`ErrorKind::UnexpectedEof`] when the source ends first.
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.read_at(offset + filled as u64, &mut buf[filled..])?;
            if n == 0 {
                return Err(Error::new(
                    ErrorKind::UnexpectedEof,
                    format!(
                        "source ended after {} of {} bytes at offset {}",
                        filled,
                        buf.len(),
                        offset
                    ),
                ));
            }
            filled += n;
        }
        Ok(())
    }
}

impl<T: ReadAt + ?Sized> ReadAt for &T {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        (**self).read_at(offset, buf)
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}
