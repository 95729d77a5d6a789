//! ID3 metadata tags framing the MPEG stream.
//!
//! Only the extent of the tags is of interest, their bytes are never scanned
//! for frames and never mutated.

/// Magic of a leading ID3v2 tag.
pub const ID3V2_MAGIC: &[u8; 3] = b"ID3";

/// Length of the ID3v2 header, and of its optional footer.
pub const ID3V2_HEADER_LEN: usize = 10;

/// Footer present flag in the ID3v2 header flags byte.
const ID3V2_FOOTER_FLAG: u8 = 0x10;

/// Magic of a trailing ID3v1 tag.
pub const ID3V1_MAGIC: &[u8; 3] = b"TAG";

/// Fixed length of an ID3v1 tag.
pub const ID3V1_LEN: usize = 128;

/// Decode a syncsafe integer, 7 significant bits per byte, big endian.
pub fn read_syncsafe(bytes: [u8; 4]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |value, &b| (value << 7) | u32::from(b & 0x7F))
}

/// Offset of the first byte after a leading ID3v2 tag, 0 if there is none.
///
/// The result never exceeds `data.len()`, a tag declaring more bytes than
/// available swallows the whole input.
pub fn id3v2_end(data: &[u8]) -> usize {
    if data.len() < ID3V2_HEADER_LEN || &data[..3] != ID3V2_MAGIC {
        return 0;
    }

    let size = read_syncsafe([data[6], data[7], data[8], data[9]]) as usize;
    let footer = if data[5] & ID3V2_FOOTER_FLAG != 0 {
        ID3V2_HEADER_LEN
    } else {
        0
    };

    (ID3V2_HEADER_LEN + size + footer).min(data.len())
}

/// Offset of a trailing ID3v1 tag, `data.len()` if there is none.
///
/// A tag overlapping the region before `not_before` is not considered.
pub fn id3v1_start(data: &[u8], not_before: usize) -> usize {
    match data.len().checked_sub(ID3V1_LEN) {
        Some(start) if start >= not_before && &data[start..start + 3] == ID3V1_MAGIC => start,
        _ => data.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_syncsafe() {
        assert_eq!(read_syncsafe([0x00, 0x00, 0x02, 0x01]), 257);
        assert_eq!(read_syncsafe([0x7F, 0x7F, 0x7F, 0x7F]), (1 << 28) - 1);
        // the high bit of each byte is ignored
        assert_eq!(read_syncsafe([0x80, 0x80, 0x80, 0x81]), 1);
    }

    #[test]
    fn test_id3v2_end() {
        let mut data = vec![0u8; 300];
        data[..3].copy_from_slice(ID3V2_MAGIC);
        data[3] = 4;
        data[9] = 100;

        assert_eq!(id3v2_end(&data), 110);
    }

    #[test]
    fn test_id3v2_end_with_footer() {
        let mut data = vec![0u8; 300];
        data[..3].copy_from_slice(ID3V2_MAGIC);
        data[5] = ID3V2_FOOTER_FLAG;
        data[9] = 100;

        assert_eq!(id3v2_end(&data), 120);
    }

    #[test]
    fn test_id3v2_end_is_clamped() {
        let mut data = vec![0u8; 20];
        data[..3].copy_from_slice(ID3V2_MAGIC);
        data[8] = 0x7F;

        assert_eq!(id3v2_end(&data), 20);
    }

    #[test]
    fn test_no_tags() {
        let data = [0xFFu8; 200];

        assert_eq!(id3v2_end(&data), 0);
        assert_eq!(id3v1_start(&data, 0), 200);
    }

    #[test]
    fn test_id3v1_start() {
        let mut data = vec![0u8; 500];
        data[372..375].copy_from_slice(ID3V1_MAGIC);

        assert_eq!(id3v1_start(&data, 0), 372);
        assert_eq!(id3v1_start(&data, 400), 500);
    }
}
