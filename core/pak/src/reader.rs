use crate::error::PakError;
use crate::types::{PakEntry, PakRecord};
use crate::{DIRECTORY_ENTRY_SIZE, NAME_SIZE, PAK_SIGNATURE, Result};
use byteorder::{LE, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

/// Read the archive directory without touching the payloads.
pub fn read_directory<R: Read + Seek>(mut reader: R) -> Result<Vec<PakEntry>> {
    reader.seek(SeekFrom::Start(0))?;

    let mut signature = [0u8; 4];
    reader.read_exact(&mut signature)?;
    if &signature != PAK_SIGNATURE {
        return Err(PakError::InvalidSignature(signature));
    }

    let directory_offset = reader.read_u32::<LE>()?;
    let directory_length = reader.read_u32::<LE>()?;
    // The format note: a directory length not divisible by 64 means the
    // archive is broken.
    if directory_length % DIRECTORY_ENTRY_SIZE != 0 {
        return Err(PakError::InvalidDirectoryLength(directory_length));
    }

    reader.seek(SeekFrom::Start(directory_offset as u64))?;

    let count = directory_length / DIRECTORY_ENTRY_SIZE;
    let mut entries = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let mut name = [0u8; NAME_SIZE];
        reader.read_exact(&mut name)?;
        let end = name.iter().position(|&b| b == 0).unwrap_or(NAME_SIZE);
        let path = String::from_utf8_lossy(&name[..end]).to_string();

        let offset = reader.read_u32::<LE>()?;
        let size = reader.read_u32::<LE>()?;

        entries.push(PakEntry { path, offset, size });
    }

    Ok(entries)
}

/// Read the directory and every payload.
pub fn unpack<R: Read + Seek>(mut reader: R) -> Result<Vec<PakRecord>> {
    let entries = read_directory(&mut reader)?;

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        reader.seek(SeekFrom::Start(entry.offset as u64))?;
        let mut data = vec![0u8; entry.size as usize];
        reader.read_exact(&mut data)?;

        records.push(PakRecord {
            path: entry.path,
            data,
        });
    }

    Ok(records)
}
