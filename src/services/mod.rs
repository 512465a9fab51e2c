//! WebAPI services
//!
//! One service per WebAPI area. Each holds a shared HTTP executor and the
//! response cache; read-mostly methods route through the cache with a
//! per-method TTL policy and accept a `force_refresh` bypass.

pub mod cohorts;
pub mod concept_sets;
pub mod info;
pub mod jobs;
pub mod sources;
pub mod vocabulary;

pub use cohorts::CohortService;
pub use concept_sets::ConceptSetService;
pub use info::InfoService;
pub use jobs::JobsService;
pub use sources::SourcesService;
pub use vocabulary::{ConceptSearch, VocabularyService};
