// crates/riskglobe-core/src/model/score.rs
use crate::traits::ScoreLookup;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One country's risk record as served by the score endpoint:
/// `{ "score": 3.2, "entitled": true }`.
///
/// `code` is not part of the payload; it is filled from the map key when the
/// table is built. A record without `entitled` is treated as not entitled.
/// `name` is the portfolio's own label, shown by the CLI when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(skip)]
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default)]
    pub entitled: bool,
}

impl ScoreRecord {
    pub fn new(code: impl Into<String>, score: Option<f64>, entitled: bool) -> Self {
        Self {
            code: code.into(),
            name: None,
            score,
            entitled,
        }
    }
}

/// Accepts finite numbers, numeric strings and `null`; anything else becomes
/// `None` instead of failing the whole document.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    let score = match Option::<RawScore>::deserialize(deserializer)? {
        Some(RawScore::Number(n)) => Some(n),
        Some(RawScore::Text(s)) => s.trim().parse().ok(),
        Some(RawScore::Other(_)) | None => None,
    };
    // "NaN" and "inf" parse as f64 but are not scores.
    Ok(score.filter(|s| s.is_finite()))
}

/// The lookup table built once from the score document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    records: HashMap<String, ScoreRecord>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from a `code -> record` map as decoded from the wire.
    pub fn from_map(map: HashMap<String, ScoreRecord>) -> Self {
        let records = map
            .into_iter()
            .map(|(code, mut record)| {
                record.code = code.clone();
                (code, record)
            })
            .collect();
        Self { records }
    }

    pub fn insert(&mut self, record: ScoreRecord) {
        self.records.insert(record.code.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records.values()
    }

    /// Number of records that may be displayed (entitled and scored).
    pub fn visible_count(&self) -> usize {
        self.records
            .values()
            .filter(|r| self.visible_score(&r.code).is_some())
            .count()
    }
}

impl FromIterator<ScoreRecord> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = ScoreRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

impl ScoreLookup for ScoreTable {
    fn record(&self, code: &str) -> Option<&ScoreRecord> {
        self.records.get(code)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    fn parse(json: &str) -> ScoreTable {
        let map: HashMap<String, ScoreRecord> = serde_json::from_str(json).unwrap();
        ScoreTable::from_map(map)
    }

    #[test]
    fn codes_come_from_map_keys() {
        let table = parse(r#"{"US": {"score": 3, "entitled": true}}"#);
        let us = table.record("US").unwrap();
        assert_eq!(us.code, "US");
        assert_eq!(us.score, Some(3.0));
        assert!(us.entitled);
    }

    #[test]
    fn invalid_scores_become_absent() {
        let table = parse(
            r#"{
                "AA": {"score": null, "entitled": true},
                "BB": {"score": "n/a", "entitled": true},
                "CC": {"score": "4.5", "entitled": true},
                "DD": {"score": [1], "entitled": true},
                "EE": {"entitled": true}
            }"#,
        );
        assert_eq!(table.record("AA").unwrap().score, None);
        assert_eq!(table.record("BB").unwrap().score, None);
        assert_eq!(table.record("CC").unwrap().score, Some(4.5));
        assert_eq!(table.record("DD").unwrap().score, None);
        assert_eq!(table.record("EE").unwrap().score, None);
    }

    #[test]
    fn optional_label_is_kept() {
        let table = parse(r#"{"BR": {"name": "Brasil", "score": 2, "entitled": true}, "FR": {"score": 1}}"#);
        assert_eq!(table.record("BR").unwrap().name.as_deref(), Some("Brasil"));
        assert_eq!(table.record("FR").unwrap().name, None);
    }

    #[test]
    fn non_finite_scores_are_absent() {
        let table = parse(
            r#"{
                "XX": {"score": "NaN", "entitled": true},
                "YY": {"score": "inf", "entitled": true},
                "ZZ": {"score": "-Infinity", "entitled": true}
            }"#,
        );
        for code in ["XX", "YY", "ZZ"] {
            assert_eq!(table.record(code).unwrap().score, None, "{code}");
            assert_eq!(table.visible_score(code), None, "{code}");
        }
        assert_eq!(table.visible_count(), 0);
    }

    #[test]
    fn missing_entitlement_hides_the_score() {
        let table = parse(r#"{"CA": {"score": 9}}"#);
        assert!(!table.record("CA").unwrap().entitled);
        assert_eq!(table.visible_score("CA"), None);
        assert_eq!(table.visible_count(), 0);
    }
}
