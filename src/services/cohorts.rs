//! Cohort Service
//!
//! Cohort definition CRUD, generation kickoff and generation results over
//! `/cohortdefinition/`.

use std::sync::Arc;

use serde_json::Value;

use crate::cache::{fetch_with_cache, CacheKey, CachePolicy, SharedCache};
use crate::error::Result;
use crate::http::HttpExecutor;
use crate::models::{
    CohortCount, CohortDefinition, CohortGenerationInfo, InclusionRuleStats, JobExecution,
};

const GET_POLICY: CachePolicy = CachePolicy::ttl(600);

/// Service for `/cohortdefinition/` endpoints.
#[derive(Debug, Clone)]
pub struct CohortService {
    http: Arc<HttpExecutor>,
    cache: SharedCache,
}

impl CohortService {
    pub(crate) fn new(http: Arc<HttpExecutor>, cache: SharedCache) -> Self {
        Self { http, cache }
    }

    /// Lists all cohort definitions. Uncached.
    pub async fn list(&self) -> Result<Vec<CohortDefinition>> {
        let data = self.http.get("/cohortdefinition/").await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Fetches one cohort definition by id.
    pub async fn get(&self, id: i64, force_refresh: bool) -> Result<CohortDefinition> {
        let key = CacheKey::for_method("CohortService.get").arg(id).build();
        let http = self.http.clone();

        fetch_with_cache(&self.cache, GET_POLICY, key, force_refresh, || async move {
            let data = http.get(&format!("/cohortdefinition/{}", id)).await?;
            Ok(serde_json::from_value(data)?)
        })
        .await
    }

    /// Creates a cohort definition. The definition's expression is sent
    /// JSON-string-encoded, which is how the endpoint expects it.
    pub async fn create(&self, definition: &CohortDefinition) -> Result<CohortDefinition> {
        let body = Self::wire_body(definition)?;
        let data = self.http.post("/cohortdefinition/", &body).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Updates an existing cohort definition (must carry an id).
    pub async fn update(&self, definition: &CohortDefinition) -> Result<CohortDefinition> {
        let id = definition.id.ok_or_else(|| {
            crate::error::WebApiError::InvalidRequest(
                "cannot update a cohort definition without an id".to_string(),
            )
        })?;
        let body = Self::wire_body(definition)?;
        let data = self.http.put(&format!("/cohortdefinition/{}", id), &body).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Deletes a cohort definition.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.http.delete(&format!("/cohortdefinition/{}", id)).await
    }

    /// Kicks off cohort generation against a source; returns the job handle
    /// to poll via [`JobsService`](crate::services::JobsService).
    pub async fn generate(&self, id: i64, source_key: &str) -> Result<JobExecution> {
        let data = self
            .http
            .get(&format!("/cohortdefinition/{}/generate/{}", id, source_key))
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Subject/entry counts for a generated cohort.
    pub async fn counts(&self, id: i64) -> Result<Vec<CohortCount>> {
        let data = self.http.get(&format!("/cohortdefinition/{}/counts", id)).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Generation status records for a definition, one per source it has
    /// been generated against. Uncached so polling always sees fresh state.
    pub async fn generation_status(&self, id: i64) -> Result<Vec<CohortGenerationInfo>> {
        let data = self.http.get(&format!("/cohortdefinition/{}/info", id)).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Per-inclusion-rule statistics from the generation report.
    pub async fn inclusion_rules(
        &self,
        id: i64,
        source_key: &str,
    ) -> Result<Vec<InclusionRuleStats>> {
        let data = self
            .http
            .get(&format!("/cohortdefinition/{}/report/{}", id, source_key))
            .await?;
        // The report wraps rule stats alongside summary fields.
        match data.get("inclusionRuleStats") {
            Some(stats) => Ok(serde_json::from_value(stats.clone())?),
            None => Ok(Vec::new()),
        }
    }

    /// Serializes a definition for the wire, string-encoding the expression.
    fn wire_body(definition: &CohortDefinition) -> Result<Value> {
        let mut body = serde_json::to_value(definition)?;
        if let Some(expression) = &definition.expression {
            body["expression"] = Value::String(serde_json::to_string(expression)?);
        }
        Ok(body)
    }
}
