use serde_json::Value;

use crate::Result;
use crate::error::EntitiesError;
use crate::reader::parse_entities;

/// Replace a document's raw `entities` string with its parsed records.
///
/// The document must be a JSON object whose `entities` field is a string.
/// Every other field passes through untouched and keeps its position.
pub fn process_document(mut doc: Value) -> Result<Value> {
    let object = doc.as_object_mut().ok_or(EntitiesError::NotAnObject)?;

    let raw = match object.get("entities") {
        Some(Value::String(raw)) => raw.clone(),
        Some(_) => return Err(EntitiesError::EntitiesNotString),
        None => return Err(EntitiesError::MissingEntities),
    };

    let parsed = parse_entities(&raw)?;
    object.insert("entities".to_string(), serde_json::to_value(parsed)?);

    Ok(doc)
}
