use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::Result;
use crate::envelope::process_document;
use crate::reader::parse_entities;
use crate::types::Entity;
use crate::writer::write_entities;

fn read_input(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn emit(text: &str, output: &Option<PathBuf>, what: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            println!("{} to {:?}", what, path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

pub fn entities_decode(input: &Option<PathBuf>, output: &Option<PathBuf>) -> Result<()> {
    // Decode raw entity block -> JSON array
    let content = read_input(input)?;
    let parsed = parse_entities(&content)?;

    let json = serde_json::to_string_pretty(&parsed)?;
    emit(&format!("{}\n", json), output, "Decoded entities")
}

pub fn entities_process(input: &Option<PathBuf>, output: &Option<PathBuf>) -> Result<()> {
    // Replace the raw `entities` field of a .bsp.json document
    let content = read_input(input)?;
    let doc: Value = serde_json::from_str(&content)?;
    let doc = process_document(doc)?;

    let json = serde_json::to_string_pretty(&doc)?;
    emit(&format!("{}\n", json), output, "Processed document")
}

pub fn entities_encode(input: &Path, output: &Option<PathBuf>) -> Result<()> {
    // Encode JSON array -> raw entity block
    let content = fs::read_to_string(input)?;
    let parsed: Vec<Entity> = serde_json::from_str(&content)?;

    let text = write_entities(&parsed);
    emit(&text, output, "Encoded entities")
}
