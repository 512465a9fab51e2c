//! Cohort definition models.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A cohort definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortDefinition {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_expression_type")]
    pub expression_type: String,
    /// Cohort expression; WebAPI sometimes returns it JSON-string-encoded
    #[serde(default, deserialize_with = "expression_from_any")]
    pub expression: Option<Value>,
}

fn default_expression_type() -> String {
    "SIMPLE_EXPRESSION".to_string()
}

/// Accepts the expression either as an object or as an embedded JSON string;
/// an unparseable string decodes to `None` rather than failing the payload.
fn expression_from_any<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => serde_json::from_str(&s).ok(),
        other => other,
    })
}

/// Composite key of a generation record: which definition, on which source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationId {
    #[serde(default)]
    pub cohort_definition_id: Option<i64>,
    #[serde(default)]
    pub source_id: Option<i64>,
}

/// One per-source generation status record for a cohort definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortGenerationInfo {
    #[serde(default)]
    pub id: Option<GenerationId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_time: Option<i64>,
    #[serde(default)]
    pub execution_duration: Option<i64>,
    #[serde(default)]
    pub is_valid: Option<bool>,
}

/// Per-rule inclusion statistics for a generated cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionRuleStats {
    pub id: i64,
    pub name: String,
    pub count: i64,
    pub person_count: i64,
}

/// Subject/entry counts for a generated cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortCount {
    pub cohort_definition_id: i64,
    pub subject_count: i64,
    pub entry_count: i64,
}
