use crate::core::io::tsv::TsvTable;
use crate::core::models::record::RawRecord;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, warn};

/// Columns of the canonical record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalColumn {
    Accession,
    EntryId,
    ProteinName,
    Organism,
    EcNumber,
    Length,
    Sequence,
}

impl CanonicalColumn {
    pub const ALL: [CanonicalColumn; 7] = [
        CanonicalColumn::Accession,
        CanonicalColumn::EntryId,
        CanonicalColumn::ProteinName,
        CanonicalColumn::Organism,
        CanonicalColumn::EcNumber,
        CanonicalColumn::Length,
        CanonicalColumn::Sequence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CanonicalColumn::Accession => "Accession",
            CanonicalColumn::EntryId => "ID",
            CanonicalColumn::ProteinName => "Protein_Name",
            CanonicalColumn::Organism => "Organism",
            CanonicalColumn::EcNumber => "EC",
            CanonicalColumn::Length => "Sequence_Length",
            CanonicalColumn::Sequence => "Sequence",
        }
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Explicit source-header to canonical-column mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    entries: Vec<(String, CanonicalColumn)>,
}

/// Outcome of validating a [`ColumnMap`] against the headers actually observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    pub unmapped_headers: Vec<String>,
    pub missing_columns: Vec<CanonicalColumn>,
}

impl SchemaReport {
    pub fn is_complete(&self) -> bool {
        self.missing_columns.is_empty()
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::uniprot()
    }
}

impl ColumnMap {
    pub fn new(entries: impl IntoIterator<Item = (String, CanonicalColumn)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Header names produced by the UniProtKB TSV endpoint, plus the lowercase field
    /// names that show up when a table is assembled from the field list.
    pub fn uniprot() -> Self {
        use CanonicalColumn::*;
        let pairs = [
            ("Entry", Accession),
            ("accession", Accession),
            ("Entry Name", EntryId),
            ("id", EntryId),
            ("Protein names", ProteinName),
            ("protein_name", ProteinName),
            ("Organism", Organism),
            ("organism_name", Organism),
            ("EC number", EcNumber),
            ("ec", EcNumber),
            ("Length", Length),
            ("length", Length),
            ("Sequence", Sequence),
            ("sequence", Sequence),
        ];
        Self::new(pairs.into_iter().map(|(k, v)| (k.to_string(), v)))
    }

    pub fn lookup(&self, header: &str) -> Option<CanonicalColumn> {
        self.entries
            .iter()
            .find(|(source, _)| source == header)
            .map(|(_, column)| *column)
    }

    /// Resolves each canonical column to a table column index. When two headers map to the
    /// same canonical column, the leftmost one wins.
    pub fn resolve(&self, headers: &[String]) -> ([Option<usize>; 7], SchemaReport) {
        let mut slots = [None; 7];
        let mut report = SchemaReport::default();

        for (index, header) in headers.iter().enumerate() {
            match self.lookup(header) {
                Some(column) => {
                    let slot = &mut slots[column.slot()];
                    if slot.is_none() {
                        *slot = Some(index);
                    }
                }
                None => report.unmapped_headers.push(header.clone()),
            }
        }

        report.missing_columns = CanonicalColumn::ALL
            .iter()
            .copied()
            .filter(|c| slots[c.slot()].is_none())
            .collect();

        (slots, report)
    }

    /// Projects a response table onto [`RawRecord`]s.
    ///
    /// Missing columns degrade to empty metadata or an absent length/sequence. Without an
    /// accession column no row can be identified and the result is empty.
    pub fn project(&self, table: &TsvTable) -> (Vec<RawRecord>, SchemaReport) {
        let (slots, report) = self.resolve(table.headers());

        if !report.unmapped_headers.is_empty() {
            debug!(
                "Ignoring unmapped columns: {}",
                report.unmapped_headers.join(", ")
            );
        }
        if !report.is_complete() {
            let missing: Vec<&str> = report.missing_columns.iter().map(|c| c.name()).collect();
            debug!("Response lacks columns: {}", missing.join(", "));
        }

        let Some(accession_idx) = slots[CanonicalColumn::Accession.slot()] else {
            if !table.is_empty() {
                warn!(
                    "Response has {} row(s) but no accession column; discarding them.",
                    table.len()
                );
            }
            return (Vec::new(), report);
        };

        let text = |row: &[String], column: CanonicalColumn| -> String {
            slots[column.slot()]
                .and_then(|i| row.get(i))
                .cloned()
                .unwrap_or_default()
        };

        let records = table
            .rows()
            .iter()
            .filter(|row| row.get(accession_idx).is_some_and(|a| !a.is_empty()))
            .map(|row| {
                let sequence = text(row, CanonicalColumn::Sequence);
                RawRecord {
                    accession: row[accession_idx].clone(),
                    entry_id: text(row, CanonicalColumn::EntryId),
                    protein_name: text(row, CanonicalColumn::ProteinName),
                    organism: text(row, CanonicalColumn::Organism),
                    ec_number: text(row, CanonicalColumn::EcNumber),
                    length: text(row, CanonicalColumn::Length).parse().ok(),
                    sequence: (!sequence.is_empty()).then_some(sequence),
                }
            })
            .collect();

        (records, report)
    }
}

/// Drops duplicate accessions (first occurrence wins) and, when sequences are expected
/// downstream, rows without a sequence. Order of survivors is preserved.
pub fn normalize(records: Vec<RawRecord>, require_sequence: bool) -> Vec<RawRecord> {
    let total = records.len();
    let mut seen = HashSet::with_capacity(total);
    let cleaned: Vec<RawRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.accession.clone()))
        .filter(|r| !require_sequence || r.has_sequence())
        .collect();

    info!(
        "Cleaned dataset: {} unique record(s) retained out of {}.",
        cleaned.len(),
        total
    );
    cleaned
}
