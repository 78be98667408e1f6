//! ZIP container abstraction for the OOXML spreadsheet package.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// OOXML container abstraction over a ZIP archive.
///
/// Provides methods to read XML parts out of an `.xlsx` package.
pub struct OoxmlContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

/// Decode an XML part to a string, tolerating a UTF-8 BOM.
///
/// Workbook parts are UTF-8 in practice; anything undecodable is replaced
/// lossily rather than failing the whole read.
pub fn decode_xml_bytes(bytes: &[u8]) -> String {
    let body = if bytes.len() >= 3 && bytes[..3] == [0xEF, 0xBB, 0xBF] {
        &bytes[3..]
    } else {
        bytes
    };
    String::from_utf8_lossy(body).into_owned()
}

impl OoxmlContainer {
    /// Open an OOXML container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minex::container::OoxmlContainer;
    ///
    /// let container = OoxmlContainer::open("CM_Data_Explorer.xlsx")?;
    /// # Ok::<(), minex::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create an OOXML container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() < 4 || data[..4] != ZIP_MAGIC {
            return Err(Error::NotAWorkbook("not a ZIP archive".to_string()));
        }
        let cursor = Cursor::new(data);
        let archive = zip::ZipArchive::new(cursor)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create an OOXML container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read an XML part by its path inside the package.
    pub fn read_xml(&self, part: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(part)
            .map_err(|e| Error::ZipArchive(format!("{}: {}", part, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(decode_xml_bytes(&bytes))
    }

    /// Check whether a part exists in the package.
    pub fn has_part(&self, part: &str) -> bool {
        self.archive.borrow_mut().by_name(part).is_ok()
    }

    /// List all part names in the package.
    pub fn part_names(&self) -> Vec<String> {
        self.archive
            .borrow()
            .file_names()
            .map(String::from)
            .collect()
    }
}
