use crate::DetectedEncoding;

pub(crate) const UTF_8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
pub(crate) const UTF_16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
pub(crate) const UTF_16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
pub(crate) const UTF_32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
pub(crate) const UTF_32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];

// FF FE only means UTF-32 when the next two bytes are both zero, so that
// arm has to be tried before the two-byte UTF-16 little-endian arm.
pub(crate) fn sniff(buffer: &[u8]) -> Option<DetectedEncoding> {
    match buffer {
        [0xFE, 0xFF, ..] => Some(DetectedEncoding::Utf16),
        [0xFF, 0xFE, 0x00, 0x00, ..] => Some(DetectedEncoding::Utf32),
        [0xFF, 0xFE, ..] => Some(DetectedEncoding::Utf16),
        [0xEF, 0xBB, 0xBF, ..] => Some(DetectedEncoding::Utf8),
        [0x00, 0x00, 0xFE, 0xFF, ..] => Some(DetectedEncoding::Utf32),
        _ => None,
    }
}
