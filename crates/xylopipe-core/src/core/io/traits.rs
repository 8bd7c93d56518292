use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Reads a collection of records from a flat file format.
pub trait RecordReader {
    /// The record type produced by the format.
    type Record;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Parses every record from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails or the content is structurally invalid.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Record>, Self::Error>;

    /// Parses every record from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self::Record>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Writes a collection of records to a flat file format.
pub trait RecordWriter {
    /// The record type consumed by the format.
    type Record;

    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Serializes all records to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(records: &[Self::Record], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Serializes all records to `path`.
    ///
    /// The table is written to a sibling temporary file and renamed into place once complete,
    /// so an interrupted run never leaves a truncated file behind. On failure the temporary
    /// file is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, written or renamed.
    fn write_to_path<P: AsRef<Path>>(records: &[Self::Record], path: P) -> Result<(), Self::Error> {
        let path = path.as_ref();
        let staging = staging_path(path);
        let written = (|| -> Result<(), Self::Error> {
            let file = File::create(&staging)?;
            let mut writer = BufWriter::new(file);
            Self::write_to(records, &mut writer)?;
            writer.flush()?;
            drop(writer);
            fs::rename(&staging, path)?;
            Ok(())
        })();
        if written.is_err() {
            let _ = fs::remove_file(&staging);
        }
        written
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
