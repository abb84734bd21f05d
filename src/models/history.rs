use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// How a mood search reached the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Free text run through the classifier.
    Analysis,
    /// A mood label looked up directly (quick-select).
    Lookup,
}

/// One recorded mood search, kept in memory for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoodSearchRecord {
    pub id: Uuid,
    pub kind: SearchKind,
    /// The raw input: free text for analysis, the requested label for lookup.
    pub input: String,
    /// The mood the request resolved to.
    pub mood: String,
    /// True when the catalog substituted its default bucket.
    pub fallback: bool,
    pub timestamp: DateTime<Utc>,
}

/// Per-mood search count, reported in vocabulary order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}
