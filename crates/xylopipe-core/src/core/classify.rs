use crate::core::models::record::{ClassifiedRecord, EnrichedRecord, ThermalClass};

/// Half-open temperature bins in °C. Anything outside `[0, 120)` is `Unknown`.
const BINS: [(f64, f64, ThermalClass); 3] = [
    (0.0, 45.0, ThermalClass::Mesophilic),
    (45.0, 65.0, ThermalClass::ModeratelyThermophilic),
    (65.0, 120.0, ThermalClass::Thermophilic),
];

/// Buckets an optimum temperature. Total: NaN, infinities and missing values are `Unknown`.
pub fn classify(temperature: Option<f64>) -> ThermalClass {
    let Some(t) = temperature.filter(|t| t.is_finite()) else {
        return ThermalClass::Unknown;
    };
    BINS.iter()
        .find(|(lo, hi, _)| t >= *lo && t < *hi)
        .map_or(ThermalClass::Unknown, |(_, _, class)| *class)
}

/// Lenient numeric coercion of a temperature cell; non-numeric text becomes `None`.
pub fn coerce_temperature(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|t| t.is_finite())
}

pub fn classify_records(records: Vec<EnrichedRecord>) -> Vec<ClassifiedRecord> {
    records
        .into_iter()
        .map(|enriched| {
            let thermo_class = classify(enriched.optimum_temperature);
            ClassifiedRecord {
                enriched,
                thermo_class,
            }
        })
        .collect()
}
