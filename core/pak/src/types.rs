use serde::Serialize;

/// One directory entry of a PAK archive.
#[derive(Debug, Clone, Serialize)]
pub struct PakEntry {
    pub path: String,
    pub offset: u32,
    pub size: u32,
}

/// A fully-read archive member.
#[derive(Debug, Clone)]
pub struct PakRecord {
    pub path: String,
    pub data: Vec<u8>,
}
