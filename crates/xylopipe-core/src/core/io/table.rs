use super::traits::RecordWriter;
use crate::core::models::features::FeatureVector;
use crate::core::models::record::ClassifiedRecord;
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct MetadataRow<'a> {
    #[serde(rename = "Accession")]
    accession: &'a str,
    #[serde(rename = "ID")]
    entry_id: &'a str,
    #[serde(rename = "Protein_Name")]
    protein_name: &'a str,
    #[serde(rename = "Organism")]
    organism: &'a str,
    #[serde(rename = "EC")]
    ec_number: &'a str,
    #[serde(rename = "Sequence_Length")]
    length: Option<usize>,
    #[serde(rename = "Sequence")]
    sequence: Option<&'a str>,
    #[serde(rename = "Optimum_Temperature")]
    optimum_temperature: Option<f64>,
    #[serde(rename = "Optimum_pH")]
    optimum_ph: Option<f64>,
    #[serde(rename = "Thermo_Class")]
    thermo_class: &'static str,
}

impl<'a> From<&'a ClassifiedRecord> for MetadataRow<'a> {
    fn from(record: &'a ClassifiedRecord) -> Self {
        let raw = record.raw();
        Self {
            accession: &raw.accession,
            entry_id: &raw.entry_id,
            protein_name: &raw.protein_name,
            organism: &raw.organism,
            ec_number: &raw.ec_number,
            length: raw.length,
            sequence: raw.sequence.as_deref(),
            optimum_temperature: record.enriched.optimum_temperature,
            optimum_ph: record.enriched.optimum_ph,
            thermo_class: record.thermo_class.label(),
        }
    }
}

/// Canonical metadata columns, as read by the downstream dashboard.
pub const METADATA_COLUMNS: [&str; 10] = [
    "Accession",
    "ID",
    "Protein_Name",
    "Organism",
    "EC",
    "Sequence_Length",
    "Sequence",
    "Optimum_Temperature",
    "Optimum_pH",
    "Thermo_Class",
];

/// The per-record metadata table (one row per classified record).
pub struct MetadataTable;

impl RecordWriter for MetadataTable {
    type Record = ClassifiedRecord;
    type Error = TableError;

    fn write_to(records: &[ClassifiedRecord], writer: &mut impl Write) -> Result<(), TableError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(METADATA_COLUMNS)?;
        for record in records {
            csv_writer.serialize(MetadataRow::from(record))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// The per-sequence feature table.
pub struct FeatureTable;

impl RecordWriter for FeatureTable {
    type Record = FeatureVector;
    type Error = TableError;

    fn write_to(records: &[FeatureVector], writer: &mut impl Write) -> Result<(), TableError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(FeatureVector::columns())?;
        for vector in records {
            csv_writer.write_record(vector.cells())?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
