//! Vocabulary models: concepts, ancestry, domains.

use serde::{Deserialize, Serialize};

use super::opt_date_string;

/// An OMOP vocabulary concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    #[serde(alias = "CONCEPT_ID")]
    pub concept_id: i64,
    #[serde(alias = "CONCEPT_NAME")]
    pub concept_name: String,
    #[serde(default, alias = "VOCABULARY_ID")]
    pub vocabulary_id: Option<String>,
    #[serde(default, alias = "CONCEPT_CLASS_ID")]
    pub concept_class_id: Option<String>,
    #[serde(default, alias = "STANDARD_CONCEPT")]
    pub standard_concept: Option<String>,
    #[serde(default, alias = "CONCEPT_CODE")]
    pub concept_code: Option<String>,
    #[serde(default, alias = "DOMAIN_ID")]
    pub domain_id: Option<String>,
    /// ISO date; millisecond-epoch responses are normalized on decode
    #[serde(default, alias = "VALID_START_DATE", deserialize_with = "opt_date_string")]
    pub valid_start_date: Option<String>,
    #[serde(default, alias = "VALID_END_DATE", deserialize_with = "opt_date_string")]
    pub valid_end_date: Option<String>,
    #[serde(default, alias = "INVALID_REASON")]
    pub invalid_reason: Option<String>,
}

/// One row of the concept ancestry table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptAncestor {
    pub ancestor_concept_id: i64,
    pub descendant_concept_id: i64,
    #[serde(default)]
    pub min_levels_of_separation: Option<i32>,
    #[serde(default)]
    pub max_levels_of_separation: Option<i32>,
}

/// A vocabulary domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[serde(alias = "DOMAIN_ID")]
    pub domain_id: String,
    #[serde(default, alias = "DOMAIN_NAME")]
    pub domain_name: Option<String>,
}
