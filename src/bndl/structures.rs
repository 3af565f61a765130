use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use anyhow::{Result, bail};

/// Capacity of the name field of a file table entry
pub const NAME_LEN: usize = 12;
/// Capacity of the extension field of a file table entry
pub const EXT_LEN: usize = 4;
/// Longest possible display name: name, dot, extension
pub const DISPLAY_NAME_MAX: usize = NAME_LEN + 1 + EXT_LEN;

/// Bundle header - 16 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleHeader {
    pub version: u16,
    pub flags: u16,
    pub file_count: u32,
}

impl BundleHeader {
    pub const SIGNATURE: &'static [u8] = b"BNDL";
    pub const SIZE: usize = 16;
    pub const VERSION: u16 = 1;

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            bail!("File too small to be a bundle");
        }

        if &data[0..4] != Self::SIGNATURE {
            bail!("Invalid bundle signature");
        }

        let mut cursor = Cursor::new(&data[4..]);
        let version = cursor.read_u16::<LittleEndian>()?;
        if version != Self::VERSION {
            bail!("Unsupported bundle version {}", version);
        }

        let flags = cursor.read_u16::<LittleEndian>()?;
        let file_count = cursor.read_u32::<LittleEndian>()?;
        let _reserved = cursor.read_u32::<LittleEndian>()?;

        Ok(Self {
            version,
            flags,
            file_count,
        })
    }

    /// Byte length of the file table that follows the header
    pub fn table_len(&self) -> u64 {
        self.file_count as u64 * FILE_ENTRY_SIZE as u64
    }
}

/// File table entry - 24 bytes
pub const FILE_ENTRY_SIZE: usize = NAME_LEN + EXT_LEN + 4 + 4;

/// One logical file inside a bundle.
///
/// Text fields are decoded once when the table is read; nothing downstream
/// looks at the padded on-disk bytes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub extension: String,
    pub size: u64,
    pub offset: u64,
}

impl FileRecord {
    /// Build a record from the fixed-capacity on-disk fields
    pub fn from_raw(name: &[u8; NAME_LEN], ext: &[u8; EXT_LEN], size: u32, offset: u32) -> Self {
        Self {
            name: decode_padded(name),
            extension: decode_padded(ext),
            size: size as u64,
            offset: offset as u64,
        }
    }

    /// Parse a file table entry from a cursor
    pub fn read_from(cursor: &mut Cursor<&[u8]>) -> Result<Self> {
        let mut name = [0u8; NAME_LEN];
        cursor.read_exact(&mut name)?;
        let mut ext = [0u8; EXT_LEN];
        cursor.read_exact(&mut ext)?;
        let size = cursor.read_u32::<LittleEndian>()?;
        let offset = cursor.read_u32::<LittleEndian>()?;
        Ok(Self::from_raw(&name, &ext, size, offset))
    }

    /// `name.extension`, or just `name` when the extension is empty.
    ///
    /// Both the table and the extractor go through this, so what is
    /// highlighted is always what lands on disk.
    pub fn display_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }

    /// Exclusive end of the body, `None` on overflow
    pub fn end(&self) -> Option<u64> {
        self.offset.checked_add(self.size)
    }
}

/// Bytes up to the first NUL (or the whole field), lossily decoded.
///
/// Control characters become U+FFFD so a name can never carry terminal
/// escape sequences or line breaks into the table.
fn decode_padded(field: &[u8]) -> String {
    let used = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..used])
        .chars()
        .map(|c| if c.is_control() { char::REPLACEMENT_CHARACTER } else { c })
        .collect()
}

/// The ordered, fixed list of records of an opened bundle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveTable {
    records: Vec<FileRecord>,
}

impl ArchiveTable {
    pub fn new(records: Vec<FileRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FileRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }
}
