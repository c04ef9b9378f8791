// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 dataset loading.
//!
//! The input is a document mapping two-letter codes to record objects:
//!
//! ```json
//! { "fr": { "639-1": "fr", "639-2": "fra", "639-2/B": "fre", "name": "French" } }
//! ```
//!
//! Only `639-2` and `639-2/B` feed the generated tables. Record order is the
//! document order, which is what keeps generated output byte-stable.

use crate::error::{MapgenError, Result};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

pub const ALPHA3_FIELD: &str = "639-2";
pub const ALPHA3_BIBLIOGRAPHIC_FIELD: &str = "639-2/B";

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "iso_639-1.json";

/// One language entry, keyed by its ISO 639-1 code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageRecord {
    #[serde(skip)]
    alpha2: String,
    #[serde(rename = "639-2", default)]
    alpha3: Option<String>,
    #[serde(rename = "639-2/B", default)]
    alpha3_bibliographic: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl LanguageRecord {
    pub fn new(alpha2: &str, alpha3: &str) -> Self {
        Self {
            alpha2: alpha2.to_string(),
            alpha3: Some(alpha3.to_string()),
            alpha3_bibliographic: None,
            name: None,
        }
    }

    pub fn with_bibliographic(mut self, code: &str) -> Self {
        self.alpha3_bibliographic = Some(code.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    /// Primary (terminological) ISO 639-2 code.
    ///
    /// A record without one cannot be rendered and yields a schema error.
    pub fn alpha3(&self) -> Result<&str> {
        self.alpha3.as_deref().ok_or_else(|| MapgenError::Schema {
            alpha2: self.alpha2.clone(),
            field: ALPHA3_FIELD,
        })
    }

    pub fn alpha3_bibliographic(&self) -> Option<&str> {
        self.alpha3_bibliographic.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Source document syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DatasetFormat::Yaml
            }
            _ => DatasetFormat::Json,
        }
    }
}

/// Ordered collection of language records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<LanguageRecord>,
}

impl Dataset {
    pub fn new(records: Vec<LanguageRecord>) -> Self {
        Self { records }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| MapgenError::data_load(path, err))?;
        let dataset = Self::parse(&content, DatasetFormat::from_path(path))
            .map_err(|source| MapgenError::data_load(path, source))?;
        tracing::debug!(
            path = %path.display(),
            records = dataset.len(),
            "loaded language dataset"
        );
        Ok(dataset)
    }

    pub fn parse(
        content: &str,
        format: DatasetFormat,
    ) -> std::result::Result<Self, crate::error::LoadSource> {
        Ok(match format {
            DatasetFormat::Json => serde_json::from_str(content)?,
            DatasetFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }

    pub fn records(&self) -> &[LanguageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DatasetVisitor)
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = Dataset;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of ISO 639-1 codes to language records")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Dataset, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut records: Vec<LanguageRecord> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut positions: HashMap<String, usize> = HashMap::new();

        // A repeated key keeps its first position and takes the last value.
        while let Some((alpha2, mut record)) = access.next_entry::<String, LanguageRecord>()? {
            record.alpha2 = alpha2.clone();
            match positions.get(&alpha2) {
                Some(&index) => records[index] = record,
                None => {
                    positions.insert(alpha2, records.len());
                    records.push(record);
                }
            }
        }

        Ok(Dataset { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(dataset: &Dataset) -> Vec<&str> {
        dataset.records().iter().map(|r| r.alpha2()).collect()
    }

    #[test]
    fn json_preserves_document_order() {
        let dataset = Dataset::parse(
            r#"{"zu": {"639-2": "zul"}, "aa": {"639-2": "aar"}, "fr": {"639-2": "fra"}}"#,
            DatasetFormat::Json,
        )
        .unwrap();
        assert_eq!(codes(&dataset), vec!["zu", "aa", "fr"]);
    }

    #[test]
    fn yaml_matches_json() {
        let json = Dataset::parse(
            r#"{"fr": {"639-2": "fra", "639-2/B": "fre"}, "en": {"639-2": "eng"}}"#,
            DatasetFormat::Json,
        )
        .unwrap();
        let yaml = Dataset::parse(
            "fr:\n  639-2: fra\n  639-2/B: fre\nen:\n  639-2: eng\n",
            DatasetFormat::Yaml,
        )
        .unwrap();
        assert_eq!(json, yaml);
    }

    #[test]
    fn yaml_keeps_norwegian_as_string_key() {
        let dataset = Dataset::parse("no:\n  639-2: nor\n", DatasetFormat::Yaml).unwrap();
        assert_eq!(codes(&dataset), vec!["no"]);
    }

    #[test]
    fn duplicate_key_keeps_first_position_last_value() {
        let dataset = Dataset::parse(
            r#"{"en": {"639-2": "xxx"}, "de": {"639-2": "deu"}, "en": {"639-2": "eng"}}"#,
            DatasetFormat::Json,
        )
        .unwrap();
        assert_eq!(codes(&dataset), vec!["en", "de"]);
        assert_eq!(dataset.records()[0].alpha3().unwrap(), "eng");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let dataset = Dataset::parse(
            r#"{"de": {"639-1": "de", "639-2": "deu", "639-2/B": "ger", "name": "German", "family": "Indo-European"}}"#,
            DatasetFormat::Json,
        )
        .unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.alpha3().unwrap(), "deu");
        assert_eq!(record.alpha3_bibliographic(), Some("ger"));
        assert_eq!(record.name(), Some("German"));
        assert_eq!(
            record,
            &LanguageRecord::new("de", "deu")
                .with_bibliographic("ger")
                .with_name("German")
        );
    }

    #[test]
    fn missing_alpha3_is_schema_error_on_access() {
        let dataset = Dataset::parse(r#"{"xx": {"name": "Nothing"}}"#, DatasetFormat::Json).unwrap();
        let err = dataset.records()[0].alpha3().unwrap_err();
        assert!(err.is_schema());
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn non_map_document_is_rejected() {
        assert!(Dataset::parse("[1, 2, 3]", DatasetFormat::Json).is_err());
        assert!(Dataset::parse("not json", DatasetFormat::Json).is_err());
    }

    #[test]
    fn wrong_field_type_is_rejected_by_parser() {
        assert!(Dataset::parse(r#"{"en": {"639-2": 42}}"#, DatasetFormat::Json).is_err());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(DatasetFormat::from_path(Path::new("a.yaml")), DatasetFormat::Yaml);
        assert_eq!(DatasetFormat::from_path(Path::new("a.YML")), DatasetFormat::Yaml);
        assert_eq!(DatasetFormat::from_path(Path::new("a.json")), DatasetFormat::Json);
        assert_eq!(DatasetFormat::from_path(Path::new("iso")), DatasetFormat::Json);
    }
}
