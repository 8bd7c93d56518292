use super::traits::{RecordReader, RecordWriter};
use crate::core::models::sequence::SequenceEntry;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: sequence data before the first header")]
    OrphanSequence { line: usize },
}

/// The textual sequence-record format: a `>` header line followed by the sequence.
///
/// Writing always emits the sequence on a single line. Reading accepts wrapped sequences,
/// uppercases residues, strips whitespace and drops entries whose sequence is empty.
pub struct FastaFile;

impl FastaFile {
    /// Extracts the bare sequence from a single-entry FASTA document, as returned by the
    /// remote per-accession sequence endpoint.
    pub fn sequence_from_str(text: &str) -> String {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('>'))
            .collect()
    }
}

impl RecordReader for FastaFile {
    type Record = SequenceEntry;
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<SequenceEntry>, FastaError> {
        let mut entries = Vec::new();
        let mut current: Option<SequenceEntry> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                if let Some(entry) = current.take() {
                    push_non_empty(&mut entries, entry);
                }
                current = Some(SequenceEntry::new(header.trim(), String::new()));
            } else {
                let Some(entry) = current.as_mut() else {
                    return Err(FastaError::OrphanSequence { line: line_num + 1 });
                };
                entry.sequence.extend(
                    line.chars()
                        .filter(|c| !c.is_whitespace())
                        .map(|c| c.to_ascii_uppercase()),
                );
            }
        }

        if let Some(entry) = current {
            push_non_empty(&mut entries, entry);
        }
        Ok(entries)
    }
}

fn push_non_empty(entries: &mut Vec<SequenceEntry>, entry: SequenceEntry) {
    if !entry.sequence.is_empty() {
        entries.push(entry);
    }
}

impl RecordWriter for FastaFile {
    type Record = SequenceEntry;
    type Error = FastaError;

    fn write_to(records: &[SequenceEntry], writer: &mut impl Write) -> Result<(), FastaError> {
        for entry in records {
            writeln!(writer, ">{}", entry.header)?;
            writeln!(writer, "{}", entry.sequence)?;
        }
        Ok(())
    }
}
