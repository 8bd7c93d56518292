use std::fmt;

/// A single search against the remote database.
///
/// Built through [`QueryRequest::new`], which rejects an empty result size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
    pub size: usize,
    pub include_sequences: bool,
    /// Simplified query substituted once when the primary query is rejected (HTTP 400).
    pub fallback_query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSize;

impl QueryRequest {
    pub fn new(
        query: impl Into<String>,
        size: usize,
        include_sequences: bool,
    ) -> Result<Self, InvalidSize> {
        if size == 0 {
            return Err(InvalidSize);
        }
        Ok(Self {
            query: query.into(),
            size,
            include_sequences,
            fallback_query: None,
        })
    }

    pub fn with_fallback(mut self, fallback_query: impl Into<String>) -> Self {
        self.fallback_query = Some(fallback_query.into());
        self
    }
}

/// One row per accession as delivered by the remote search, after column mapping.
///
/// Metadata cells the remote left blank are empty strings; only `length` and
/// `sequence` are genuinely optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    pub accession: String,
    pub entry_id: String,
    pub protein_name: String,
    pub organism: String,
    pub ec_number: String,
    pub length: Option<usize>,
    pub sequence: Option<String>,
}

impl RawRecord {
    pub fn has_sequence(&self) -> bool {
        self.sequence.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// Optimum conditions mined from an entry's free-text annotations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Optimum {
    pub temperature: Option<f64>,
    pub ph: Option<f64>,
}

impl Optimum {
    pub const ABSENT: Optimum = Optimum {
        temperature: None,
        ph: None,
    };

    pub fn is_absent(&self) -> bool {
        self.temperature.is_none() && self.ph.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub raw: RawRecord,
    pub optimum_temperature: Option<f64>,
    pub optimum_ph: Option<f64>,
}

impl EnrichedRecord {
    pub fn new(raw: RawRecord, optimum: Optimum) -> Self {
        Self {
            raw,
            optimum_temperature: optimum.temperature,
            optimum_ph: optimum.ph,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThermalClass {
    Mesophilic,
    ModeratelyThermophilic,
    Thermophilic,
    Unknown,
}

impl ThermalClass {
    pub const ALL: [ThermalClass; 4] = [
        ThermalClass::Mesophilic,
        ThermalClass::ModeratelyThermophilic,
        ThermalClass::Thermophilic,
        ThermalClass::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ThermalClass::Mesophilic => "Mesophilic",
            ThermalClass::ModeratelyThermophilic => "Moderately Thermophilic",
            ThermalClass::Thermophilic => "Thermophilic",
            ThermalClass::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ThermalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub enriched: EnrichedRecord,
    pub thermo_class: ThermalClass,
}

impl ClassifiedRecord {
    pub fn raw(&self) -> &RawRecord {
        &self.enriched.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_rejects_zero_size() {
        assert_eq!(QueryRequest::new("xylanase", 0, true), Err(InvalidSize));
    }

    #[test]
    fn query_request_keeps_fallback() {
        let request = QueryRequest::new("GH10 AND reviewed:true", 30, true)
            .unwrap()
            .with_fallback("xylanase AND reviewed:true");
        assert_eq!(request.size, 30);
        assert!(request.include_sequences);
        assert_eq!(
            request.fallback_query.as_deref(),
            Some("xylanase AND reviewed:true")
        );
    }

    #[test]
    fn has_sequence_treats_blank_as_missing() {
        let mut record = RawRecord {
            accession: "P1".into(),
            ..Default::default()
        };
        assert!(!record.has_sequence());
        record.sequence = Some("   ".into());
        assert!(!record.has_sequence());
        record.sequence = Some("MKV".into());
        assert!(record.has_sequence());
    }

    #[test]
    fn thermal_class_labels_match_table_values() {
        let labels: Vec<_> = ThermalClass::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Mesophilic",
                "Moderately Thermophilic",
                "Thermophilic",
                "Unknown"
            ]
        );
    }
}
