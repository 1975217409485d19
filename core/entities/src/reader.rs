use crate::Result;
use crate::error::EntitiesError;
use crate::types::Entity;

// --- Parsing Logic (Text -> Records) ---

/// Parse a raw entity block into its records, in source order.
///
/// A line that trims to `{` opens a record, one that trims to `}` closes it
/// and emits it, and every other line must carry a `"key" "value"` pair.
/// The last line of the block is the terminator and is never scanned, so a
/// block missing its trailing line loses its final content line. A trailing
/// `{` group with no closing brace is dropped.
pub fn parse_entities(raw: &str) -> Result<Vec<Entity>> {
    let lines: Vec<&str> = raw.split('\n').collect();

    let mut entities = Vec::new();
    let mut entity = Entity::new();

    // split() always yields at least one segment, the terminator line.
    for (index, line) in lines[..lines.len() - 1].iter().enumerate() {
        let item = line.trim();
        if item == "{" {
            // Structural marker; the accumulator was already reset by the
            // previous `}` (or is still empty at the start of the scan).
        } else if item == "}" {
            entities.push(std::mem::take(&mut entity));
        } else {
            let (key, value) = split_pair(item).ok_or_else(|| EntitiesError::MalformedLine {
                line: index + 1,
                text: (*line).to_string(),
            })?;
            entity.insert(key.to_string(), value.to_string());
        }
    }

    Ok(entities)
}

/// Extract the first and second quoted substrings of a line.
///
/// Splitting on `"` puts the quoted contents at segments 1 and 3; text
/// outside the quotes is ignored. Quotes cannot be escaped in this format,
/// so a value containing `"` mis-splits.
fn split_pair(item: &str) -> Option<(&str, &str)> {
    let mut segments = item.split('"');
    segments.next()?;
    let key = segments.next()?;
    segments.next()?;
    let value = segments.next()?;
    Some((key, value))
}
