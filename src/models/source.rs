//! CDM source models.

use serde::{Deserialize, Serialize};

/// A daimon (data access role) attached to a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDaimon {
    pub daimon_type: String,
    #[serde(default)]
    pub table_qualifier: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
}

/// A CDM data source registered with WebAPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub source_id: i64,
    pub source_name: String,
    pub source_key: String,
    pub source_dialect: String,
    #[serde(default)]
    pub daimons: Vec<SourceDaimon>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_decodes() {
        let source: Source = serde_json::from_value(json!({
            "sourceId": 1,
            "sourceName": "SynPUF",
            "sourceKey": "SYNPUF",
            "sourceDialect": "postgresql",
            "daimons": [
                {"daimonType": "CDM", "tableQualifier": "cdm", "priority": 0}
            ]
        }))
        .unwrap();

        assert_eq!(source.source_key, "SYNPUF");
        assert_eq!(source.daimons.len(), 1);
        assert_eq!(source.daimons[0].daimon_type, "CDM");
    }

    #[test]
    fn test_source_daimons_default_empty() {
        let source: Source = serde_json::from_value(json!({
            "sourceId": 2,
            "sourceName": "Other",
            "sourceKey": "OTHER",
            "sourceDialect": "sql server"
        }))
        .unwrap();

        assert!(source.daimons.is_empty());
    }
}
