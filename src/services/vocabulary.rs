//! Vocabulary Service
//!
//! OMOP vocabulary and concept operations: lookup, search, hierarchy
//! traversal and domain listing. Read-heavy and stable, so most methods are
//! cached; TTLs reflect how quickly each result set drifts.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::cache::{fetch_with_cache, CacheKey, CachePolicy, SharedCache};
use crate::error::Result;
use crate::http::HttpExecutor;
use crate::models::{Concept, Domain};

// Individual concepts are effectively immutable.
const CONCEPT_POLICY: CachePolicy = CachePolicy::ttl(3600);
// Search results over a mutable index drift faster.
const SEARCH_POLICY: CachePolicy = CachePolicy::ttl(900);
// Domains and relationship sets sit in between.
const RELATED_POLICY: CachePolicy = CachePolicy::ttl(1800);
const DOMAINS_POLICY: CachePolicy = CachePolicy::ttl(1800);

// == Concept Search ==
/// Parameters for a concept search.
///
/// `query` is required; every filter narrows the result. Pagination is
/// client-side (the search endpoint ignores paging in its POST body), 1-based.
#[derive(Debug, Clone)]
pub struct ConceptSearch {
    pub query: String,
    pub vocabulary_id: Option<String>,
    pub concept_class_id: Option<String>,
    pub domain_id: Option<String>,
    /// 'S' standard, 'C' classification
    pub standard_concept: Option<String>,
    /// 'D' deleted, 'U' updated
    pub invalid_reason: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl ConceptSearch {
    /// A search for the given term with default paging (page 1, 20 results).
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            vocabulary_id: None,
            concept_class_id: None,
            domain_id: None,
            standard_concept: None,
            invalid_reason: None,
            page: 1,
            page_size: 20,
        }
    }

    pub fn vocabulary_id(mut self, id: impl Into<String>) -> Self {
        self.vocabulary_id = Some(id.into());
        self
    }

    pub fn concept_class_id(mut self, id: impl Into<String>) -> Self {
        self.concept_class_id = Some(id.into());
        self
    }

    pub fn domain_id(mut self, id: impl Into<String>) -> Self {
        self.domain_id = Some(id.into());
        self
    }

    pub fn standard_concept(mut self, flag: impl Into<String>) -> Self {
        self.standard_concept = Some(flag.into());
        self
    }

    pub fn invalid_reason(mut self, flag: impl Into<String>) -> Self {
        self.invalid_reason = Some(flag.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Cache key for this search; filters render as sorted kwargs so two
    /// searches differing only in filter spelling order share an entry.
    fn cache_key(&self) -> String {
        CacheKey::for_method("VocabularyService.search")
            .arg(self.query.as_str())
            .kwarg_opt("vocabulary_id", self.vocabulary_id.as_deref())
            .kwarg_opt("concept_class_id", self.concept_class_id.as_deref())
            .kwarg_opt("domain_id", self.domain_id.as_deref())
            .kwarg_opt("standard_concept", self.standard_concept.as_deref())
            .kwarg_opt("invalid_reason", self.invalid_reason.as_deref())
            .kwarg("page", self.page)
            .kwarg("page_size", self.page_size)
            .build()
    }

    /// Request body in the shape the search endpoint expects: uppercase
    /// keys, list-valued filters.
    fn body(&self) -> Value {
        let mut body = serde_json::Map::new();
        body.insert("QUERY".to_string(), json!(self.query));
        if let Some(v) = &self.vocabulary_id {
            body.insert("VOCABULARY_ID".to_string(), json!([v]));
        }
        if let Some(v) = &self.concept_class_id {
            body.insert("CONCEPT_CLASS_ID".to_string(), json!([v]));
        }
        if let Some(v) = &self.domain_id {
            body.insert("DOMAIN_ID".to_string(), json!([v]));
        }
        if let Some(v) = &self.standard_concept {
            body.insert("STANDARD_CONCEPT".to_string(), json!(v));
        }
        if let Some(v) = &self.invalid_reason {
            body.insert("INVALID_REASON".to_string(), json!(v));
        }
        Value::Object(body)
    }
}

// == Vocabulary Service ==
/// Service for `/vocabulary/` endpoints.
#[derive(Debug, Clone)]
pub struct VocabularyService {
    http: Arc<HttpExecutor>,
    cache: SharedCache,
}

impl VocabularyService {
    pub(crate) fn new(http: Arc<HttpExecutor>, cache: SharedCache) -> Self {
        Self { http, cache }
    }

    /// Fetches a single concept by id.
    pub async fn get_concept(&self, concept_id: i64, force_refresh: bool) -> Result<Concept> {
        let key = CacheKey::for_method("VocabularyService.get_concept")
            .arg(concept_id)
            .build();
        let http = self.http.clone();

        fetch_with_cache(&self.cache, CONCEPT_POLICY, key, force_refresh, || async move {
            let data = http.get(&format!("/vocabulary/concept/{}", concept_id)).await?;
            Ok(serde_json::from_value(data)?)
        })
        .await
    }

    /// Searches concepts by name/synonym, applying the request's filters.
    ///
    /// Pagination happens client-side on the full result list, so every page
    /// of the same filtered search is its own cache entry.
    pub async fn search(&self, request: ConceptSearch) -> Result<Vec<Concept>> {
        let key = request.cache_key();
        let http = self.http.clone();
        let page = request.page.max(1);
        let page_size = request.page_size;

        fetch_with_cache(&self.cache, SEARCH_POLICY, key, false, || async move {
            let data = http.post("/vocabulary/search/", &request.body()).await?;
            let concepts: Vec<Concept> = serde_json::from_value(data)?;

            let start = (page - 1) * page_size;
            Ok(concepts.into_iter().skip(start).take(page_size).collect())
        })
        .await
    }

    /// All descendants of a concept in the vocabulary hierarchy. Uncached:
    /// descendant sets can be large and are usually walked once.
    pub async fn descendants(&self, concept_id: i64) -> Result<Vec<Concept>> {
        let data = self
            .http
            .get(&format!("/vocabulary/concept/{}/descendants", concept_id))
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Concepts related to the given concept through vocabulary relationships.
    pub async fn related(&self, concept_id: i64) -> Result<Vec<Concept>> {
        let key = CacheKey::for_method("VocabularyService.related")
            .arg(concept_id)
            .build();
        let http = self.http.clone();

        fetch_with_cache(&self.cache, RELATED_POLICY, key, false, || async move {
            let data = http
                .get(&format!("/vocabulary/concept/{}/related", concept_id))
                .await?;
            Ok(serde_json::from_value(data)?)
        })
        .await
    }

    /// Resolves many concept ids in one round trip. Uncached (ad-hoc batches).
    pub async fn bulk_get(&self, concept_ids: &[i64]) -> Result<Vec<Concept>> {
        if concept_ids.is_empty() {
            return Ok(Vec::new());
        }
        let data = self.http.post("/vocabulary/concepts", &json!(concept_ids)).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Lists the available vocabulary domains.
    pub async fn list_domains(&self, force_refresh: bool) -> Result<Vec<Domain>> {
        let key = CacheKey::for_method("VocabularyService.list_domains").build();
        let http = self.http.clone();

        fetch_with_cache(&self.cache, DOMAINS_POLICY, key, force_refresh, || async move {
            let data = http.get("/vocabulary/domains").await?;
            Ok(serde_json::from_value(data)?)
        })
        .await
    }

    /// Bulk-resolves source codes to concepts.
    ///
    /// Each identifier is a `(code, vocabulary_id)` pair; the flags apply to
    /// every pair. Grouped responses are flattened. Uncached.
    pub async fn lookup_identifiers(
        &self,
        identifiers: &[(&str, &str)],
        include_descendants: bool,
        include_mapped: bool,
    ) -> Result<Vec<Concept>> {
        if identifiers.is_empty() {
            return Ok(Vec::new());
        }

        let payload: Vec<Value> = identifiers
            .iter()
            .map(|(code, vocab)| {
                json!({
                    "identifier": code,
                    "vocabularyId": vocab,
                    "includeDescendants": include_descendants,
                    "includeMapped": include_mapped,
                })
            })
            .collect();

        let data = self
            .http
            .post("/vocabulary/lookup/identifiers", &json!(payload))
            .await?;

        // Entries are either bare concepts or `{"concept": {...}}` wrappers.
        let entries: Vec<Value> = serde_json::from_value(data)?;
        let mut concepts = Vec::new();
        for entry in entries {
            let candidate = match entry.get("concept") {
                Some(inner) if inner.is_object() => inner.clone(),
                _ => entry,
            };
            if let Ok(concept) = serde_json::from_value::<Concept>(candidate) {
                concepts.push(concept);
            }
        }
        Ok(concepts)
    }

    /// Cache key a search request would use; exposed for diagnostics.
    pub fn search_cache_key(request: &ConceptSearch) -> String {
        request.cache_key()
    }
}
