use crate::error::PakError;
use crate::types::PakRecord;
use crate::{DIRECTORY_ENTRY_SIZE, NAME_SIZE, PAK_SIGNATURE, Result};
use byteorder::{LE, WriteBytesExt};
use std::io::{Seek, SeekFrom, Write};

/// Write records into a fresh PAK archive.
///
/// Payloads come first and the directory goes at the end, so a later tool
/// appending files only has to rewrite the directory.
pub fn pack<W: Write + Seek>(mut writer: W, records: &[PakRecord]) -> Result<()> {
    // Names need room for the NUL terminator inside the 56-byte field.
    for record in records {
        if record.path.len() >= NAME_SIZE {
            return Err(PakError::NameTooLong(record.path.clone()));
        }
    }

    // Header with placeholder directory offset/length, patched at the end.
    writer.write_all(PAK_SIGNATURE)?;
    writer.write_u32::<LE>(0)?;
    writer.write_u32::<LE>(0)?;

    let mut offsets = Vec::with_capacity(records.len());
    for record in records {
        offsets.push(writer.stream_position()? as u32);
        writer.write_all(&record.data)?;
    }

    let directory_offset = writer.stream_position()? as u32;
    for (record, offset) in records.iter().zip(offsets) {
        let mut name = [0u8; NAME_SIZE];
        name[..record.path.len()].copy_from_slice(record.path.as_bytes());
        writer.write_all(&name)?;
        writer.write_u32::<LE>(offset)?;
        writer.write_u32::<LE>(record.data.len() as u32)?;
    }

    writer.seek(SeekFrom::Start(4))?;
    writer.write_u32::<LE>(directory_offset)?;
    writer.write_u32::<LE>(records.len() as u32 * DIRECTORY_ENTRY_SIZE)?;

    Ok(())
}
