use crate::domain::ports::DocsMerger;
use crate::utils::error::Result;
use serde_json::Value;

/// Applies a `docs-2.json` overlay to an API model.
///
/// The overlay layout is:
///
/// ```json
/// {
///   "service": "<service doc>",
///   "operations": { "GetObject": "<doc>" },
///   "shapes": {
///     "BucketName": {
///       "base": "<shape doc>",
///       "refs": { "GetObjectRequest$Bucket": "<member doc>" }
///     }
///   }
/// }
/// ```
///
/// Each doc lands in a `documentation` key on the matching api node. Entries
/// for operations, shapes or members the api does not define are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyDocs;

impl DocsMerger for ApplyDocs {
    fn apply(&self, api: &mut Value, docs: Option<&Value>) -> Result<()> {
        let Some(docs) = docs else {
            return Ok(());
        };

        if let Some(service) = non_empty_str(docs.get("service")) {
            set_documentation(api, &[], service);
        }

        if let Some(operations) = docs.get("operations").and_then(Value::as_object) {
            for (operation, doc) in operations {
                if let Some(doc) = non_empty_str(Some(doc)) {
                    set_documentation(api, &["operations", operation.as_str()], doc);
                }
            }
        }

        if let Some(shapes) = docs.get("shapes").and_then(Value::as_object) {
            for (shape, entry) in shapes {
                let base = non_empty_str(entry.get("base"));
                if let Some(base) = base {
                    set_documentation(api, &["shapes", shape.as_str()], base);
                }

                let Some(refs) = entry.get("refs").and_then(Value::as_object) else {
                    continue;
                };
                for (target, doc) in refs {
                    let Some((owner, member)) = target.split_once('$') else {
                        continue;
                    };
                    // a ref without its own text inherits the shape's base doc
                    if let Some(doc) = non_empty_str(Some(doc)).or(base) {
                        set_documentation(api, &["shapes", owner, "members", member], doc);
                    }
                }
            }
        }

        Ok(())
    }
}

/// A merger that never touches the api, for callers that render without docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocs;

impl DocsMerger for NoDocs {
    fn apply(&self, _api: &mut Value, _docs: Option<&Value>) -> Result<()> {
        Ok(())
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn set_documentation(root: &mut Value, path: &[&str], doc: &str) {
    let mut node = root;
    for key in path {
        node = match node.get_mut(*key) {
            Some(next) => next,
            None => return,
        };
    }

    if let Some(object) = node.as_object_mut() {
        object.insert("documentation".to_string(), Value::String(doc.to_string()));
    }
}
