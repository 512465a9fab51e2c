//! WebAPI instance info model.

use serde::{Deserialize, Serialize};

/// Version information reported by `GET /info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApiInfo {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub build_date: Option<String>,
    #[serde(default)]
    pub git_commit_id: Option<String>,
}
