use super::record::RawRecord;

/// Delimiter between the accession, protein name and organism segments of a header line.
pub const HEADER_DELIMITER: &str = " | ";

const UNKNOWN: &str = "Unknown";

/// A `(header, sequence)` pair as stored in the sequence file.
///
/// The header never carries the leading `>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceEntry {
    pub header: String,
    pub sequence: String,
}

/// Identifying fields recovered from a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    pub accession: String,
    pub protein_name: String,
    pub organism: String,
}

impl SequenceEntry {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Builds the entry written for a record; records without a sequence get an empty one.
    /// Blank identity fields are written as `Unknown`.
    pub fn from_record(record: &RawRecord) -> Self {
        let header = [
            record.accession.as_str(),
            record.protein_name.as_str(),
            record.organism.as_str(),
        ]
        .map(|field| match field.trim() {
            "" => UNKNOWN,
            trimmed => trimmed,
        })
        .join(HEADER_DELIMITER);
        Self {
            header,
            sequence: record.sequence.clone().unwrap_or_default(),
        }
    }

    pub fn fields(&self) -> HeaderFields {
        parse_header(&self.header)
    }
}

/// Splits `accession | name | organism`. Organism names that themselves contain the
/// delimiter are re-joined; absent or blank segments become `Unknown`.
pub fn parse_header(header: &str) -> HeaderFields {
    let header = header.trim().trim_start_matches('>');
    let parts: Vec<&str> = header.split('|').map(str::trim).collect();

    let or_unknown = |s: &str| {
        let s = s.trim();
        if s.is_empty() {
            UNKNOWN.to_string()
        } else {
            s.to_string()
        }
    };

    let accession = parts.first().map_or_else(|| UNKNOWN.to_string(), |s| or_unknown(s));
    let protein_name = parts.get(1).map_or_else(|| UNKNOWN.to_string(), |s| or_unknown(s));
    let organism = if parts.len() > 2 {
        or_unknown(&parts[2..].join(HEADER_DELIMITER))
    } else {
        UNKNOWN.to_string()
    };

    HeaderFields {
        accession,
        protein_name,
        organism,
    }
}
