use crate::utils::error::Result;
use serde_json::Value;

/// Merges a documentation overlay into an API model in place.
///
/// Always called during construction. `docs` is `None` when no overlay was
/// supplied, and implementations must leave `api` untouched in that case.
pub trait DocsMerger: Send + Sync {
    fn apply(&self, api: &mut Value, docs: Option<&Value>) -> Result<()>;
}
