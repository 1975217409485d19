pub mod error;
pub mod process;
pub mod reader;
pub mod types;
pub mod writer;

pub use error::{PakError, Result};
pub use reader::{read_directory, unpack};
pub use types::{PakEntry, PakRecord};
pub use writer::pack;

/// Archive signature, the first four bytes of every PAK file.
const PAK_SIGNATURE: &[u8; 4] = b"PACK";

/// One directory entry: a 56-byte NUL-padded name, u32 position, u32 length.
const DIRECTORY_ENTRY_SIZE: u32 = 64;
const NAME_SIZE: usize = 56;

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{LE, WriteBytesExt};
    use std::io::Cursor;

    #[test]
    fn test_pak_roundtrip() {
        let original = vec![
            PakRecord {
                path: "maps/start.bsp".to_string(),
                data: b"fake bsp payload".to_vec(),
            },
            PakRecord {
                path: "gfx/palette.lmp".to_string(),
                data: vec![0x00, 0xFF, 0x12, 0x34],
            },
        ];

        let mut buf = Cursor::new(Vec::new());
        pack(&mut buf, &original).expect("Packing failed");

        let decoded = unpack(Cursor::new(buf.into_inner())).expect("Unpacking failed");

        assert_eq!(decoded.len(), original.len());
        assert_eq!(decoded[0].path, original[0].path);
        assert_eq!(decoded[0].data, original[0].data);
        assert_eq!(decoded[1].path, original[1].path);
        assert_eq!(decoded[1].data, original[1].data);
    }

    #[test]
    fn test_read_directory_reports_offsets_and_sizes() {
        let records = vec![PakRecord {
            path: "sound/misc/water1.wav".to_string(),
            data: vec![1, 2, 3, 4, 5],
        }];

        let mut buf = Cursor::new(Vec::new());
        pack(&mut buf, &records).expect("Packing failed");

        let entries = read_directory(Cursor::new(buf.into_inner())).expect("Directory failed");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "sound/misc/water1.wav");
        // Header is 12 bytes, the payload follows immediately.
        assert_eq!(entries[0].offset, 12);
        assert_eq!(entries[0].size, 5);
    }

    #[test]
    fn test_invalid_signature_is_rejected() {
        let err = read_directory(Cursor::new(b"JUNKdata".to_vec())).unwrap_err();
        assert!(matches!(err, PakError::InvalidSignature(sig) if &sig == b"JUNK"));
    }

    #[test]
    fn test_misaligned_directory_length_is_rejected() {
        let mut raw = Vec::new();
        raw.extend_from_slice(PAK_SIGNATURE);
        raw.write_u32::<LE>(12).unwrap();
        raw.write_u32::<LE>(60).unwrap(); // not a multiple of 64

        let err = read_directory(Cursor::new(raw)).unwrap_err();
        assert!(matches!(err, PakError::InvalidDirectoryLength(60)));
    }

    #[test]
    fn test_pack_rejects_oversized_names() {
        let records = vec![PakRecord {
            path: "x".repeat(NAME_SIZE),
            data: Vec::new(),
        }];

        let err = pack(Cursor::new(Vec::new()), &records).unwrap_err();
        assert!(matches!(err, PakError::NameTooLong(_)));
    }
}
