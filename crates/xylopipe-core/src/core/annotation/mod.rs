//! Mining optimum temperature and pH from UniProtKB entry annotations.
//!
//! The entry document is scanned for biophysicochemical-property comments; each
//! candidate free-text value is handed to an [`OptimumExtractor`]. Nothing in here can
//! fail: a missing, malformed or silent entry simply yields [`Optimum::ABSENT`].

pub mod grammar;

use crate::core::models::record::Optimum;
use serde_json::Value;

pub use grammar::OptimumGrammar;

const BIOPHYSICOCHEMICAL: &str = "BIOPHYSICOCHEMICAL PROPERTIES";

/// Pulls a single numeric optimum out of one annotation text.
pub trait OptimumExtractor: Send + Sync {
    fn temperature(&self, text: &str) -> Option<f64>;
    fn ph(&self, text: &str) -> Option<f64>;
}

/// Candidate annotation texts of an entry, in scan order: the comment's own `texts`,
/// then `temperatureDependence.texts`, then `phDependence.texts`, per comment.
pub fn candidate_texts(entry: &Value) -> Vec<&str> {
    let Some(comments) = entry.get("comments").and_then(Value::as_array) else {
        return Vec::new();
    };

    comments
        .iter()
        .filter(|c| c.get("commentType").and_then(Value::as_str) == Some(BIOPHYSICOCHEMICAL))
        .flat_map(|c| {
            [
                c.get("texts"),
                c.pointer("/temperatureDependence/texts"),
                c.pointer("/phDependence/texts"),
            ]
        })
        .flatten()
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|t| t.get("value").and_then(Value::as_str))
        .collect()
}

/// First temperature and first pH found across the candidate texts.
pub fn extract_optimum(entry: &Value, extractor: &impl OptimumExtractor) -> Optimum {
    let texts = candidate_texts(entry);
    Optimum {
        temperature: texts.iter().find_map(|t| extractor.temperature(t)),
        ph: texts.iter().find_map(|t| extractor.ph(t)),
    }
}

/// Parses an entry document and extracts its optimum. Malformed JSON yields
/// [`Optimum::ABSENT`].
pub fn optimum_from_body(body: &str, extractor: &impl OptimumExtractor) -> Optimum {
    match serde_json::from_str::<Value>(body) {
        Ok(entry) => extract_optimum(&entry, extractor),
        Err(e) => {
            tracing::debug!("Entry document is not valid JSON: {}", e);
            Optimum::ABSENT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry() -> Value {
        json!({
            "primaryAccession": "P33557",
            "comments": [
                {
                    "commentType": "FUNCTION",
                    "texts": [{ "value": "Optimum temperature is 99 degrees Celsius." }]
                },
                {
                    "commentType": "BIOPHYSICOCHEMICAL PROPERTIES",
                    "texts": [{ "value": "Stable between pH 3 and 8." }],
                    "phDependence": {
                        "texts": [{ "value": "Optimum pH is 5.0." }]
                    },
                    "temperatureDependence": {
                        "texts": [{ "value": "Optimum temperature is 50 degrees Celsius." }]
                    }
                }
            ]
        })
    }

    #[test]
    fn candidate_texts_only_from_biophysicochemical_comments_in_order() {
        let value = entry();
        let texts = candidate_texts(&value);
        assert_eq!(
            texts,
            vec![
                "Stable between pH 3 and 8.",
                "Optimum temperature is 50 degrees Celsius.",
                "Optimum pH is 5.0.",
            ]
        );
    }

    #[test]
    fn extract_reads_dependence_blocks() {
        let optimum = extract_optimum(&entry(), &OptimumGrammar);
        assert_eq!(optimum.temperature, Some(50.0));
        assert_eq!(optimum.ph, Some(5.0));
    }

    #[test]
    fn extract_reads_plain_texts() {
        let value = json!({
            "comments": [{
                "commentType": "BIOPHYSICOCHEMICAL PROPERTIES",
                "texts": [{ "value": "Optimum temperature: 65°C. Optimum pH: 6.5" }]
            }]
        });
        let optimum = extract_optimum(&value, &OptimumGrammar);
        assert_eq!(optimum, Optimum { temperature: Some(65.0), ph: Some(6.5) });
    }

    #[test]
    fn first_match_wins_across_texts() {
        let value = json!({
            "comments": [
                {
                    "commentType": "BIOPHYSICOCHEMICAL PROPERTIES",
                    "texts": [{ "value": "Optimum temperature is 40 degrees Celsius." }]
                },
                {
                    "commentType": "BIOPHYSICOCHEMICAL PROPERTIES",
                    "texts": [{ "value": "Optimum temperature is 70 degrees Celsius." }]
                }
            ]
        });
        assert_eq!(extract_optimum(&value, &OptimumGrammar).temperature, Some(40.0));
    }

    #[test]
    fn entries_without_annotation_are_absent() {
        assert!(extract_optimum(&json!({}), &OptimumGrammar).is_absent());
        assert!(extract_optimum(&json!({ "comments": "oops" }), &OptimumGrammar).is_absent());
        let no_texts = json!({ "comments": [{ "commentType": "BIOPHYSICOCHEMICAL PROPERTIES" }] });
        assert!(extract_optimum(&no_texts, &OptimumGrammar).is_absent());
    }

    #[test]
    fn malformed_body_is_absent() {
        assert!(optimum_from_body("<html>502</html>", &OptimumGrammar).is_absent());
        assert!(optimum_from_body("", &OptimumGrammar).is_absent());
    }

    #[test]
    fn custom_extractor_is_honoured() {
        struct Constant;
        impl OptimumExtractor for Constant {
            fn temperature(&self, _: &str) -> Option<f64> {
                Some(1.0)
            }
            fn ph(&self, _: &str) -> Option<f64> {
                None
            }
        }
        let optimum = extract_optimum(&entry(), &Constant);
        assert_eq!(optimum, Optimum { temperature: Some(1.0), ph: None });
    }
}
