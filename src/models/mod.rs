//! Data models for WebAPI payloads
//!
//! serde DTOs mirroring the JSON shapes WebAPI returns. Wire names are
//! camelCase; Atlas-style uppercase variants (`CONCEPT_ID`, `DOMAIN_ID`, ...)
//! are accepted via aliases so both response dialects decode.

pub mod cohort;
pub mod concept_set;
pub mod info;
pub mod job;
pub mod source;
pub mod vocabulary;

// Re-export commonly used types
pub use cohort::{CohortCount, CohortDefinition, CohortGenerationInfo, GenerationId, InclusionRuleStats};
pub use concept_set::{ConceptSet, ConceptSetItem};
pub use info::WebApiInfo;
pub use job::JobExecution;
pub use source::{Source, SourceDaimon};
pub use vocabulary::{Concept, ConceptAncestor, Domain};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes an optional date that may arrive as an ISO string or as a
/// millisecond epoch number (Atlas responses use either).
pub(crate) fn opt_date_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(chrono::DateTime::from_timestamp_millis)
            .map(|dt| dt.format("%Y-%m-%d").to_string()),
        Some(other) => Some(other.to_string()),
    })
}
