//! Concept set models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named concept set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSet {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub oid: Option<i64>,
    /// Raw concept-set expression as WebAPI returns it
    #[serde(default)]
    pub expression: Option<Value>,
}

/// One item of a concept set, as returned by `/conceptset/{id}/items`.
///
/// WebAPI encodes the inclusion flags as 0/1 integers; the accessor methods
/// translate them to booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSetItem {
    pub id: i64,
    pub concept_set_id: i64,
    pub concept_id: i64,
    pub is_excluded: i32,
    pub include_descendants: i32,
    #[serde(default)]
    pub include_mapped: Option<i32>,
}

impl ConceptSetItem {
    /// Whether the concept is excluded from the set.
    pub fn excluded(&self) -> bool {
        self.is_excluded != 0
    }

    /// Whether descendant concepts are included.
    pub fn descendants_included(&self) -> bool {
        self.include_descendants != 0
    }

    /// Whether mapped concepts are included.
    pub fn mapped_included(&self) -> bool {
        self.include_mapped.map(|v| v != 0).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_concept_set_decodes() {
        let cs: ConceptSet =
            serde_json::from_value(json!({"id": 10, "name": "Test CS"})).unwrap();
        assert_eq!(cs.id, Some(10));
        assert_eq!(cs.name, "Test CS");
        assert!(cs.expression.is_none());
    }

    #[test]
    fn test_item_flag_accessors() {
        let item: ConceptSetItem = serde_json::from_value(json!({
            "id": 1,
            "conceptSetId": 10,
            "conceptId": 201826,
            "isExcluded": 0,
            "includeDescendants": 1
        }))
        .unwrap();

        assert!(!item.excluded());
        assert!(item.descendants_included());
        assert!(!item.mapped_included());
    }
}
