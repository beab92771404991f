use std::borrow::Cow;

use encoding_rs::Encoding;
use encoding_rs::EUC_JP;
use encoding_rs::ISO_2022_JP;
use encoding_rs::SHIFT_JIS;
use encoding_rs::UTF_8;

use crate::bom;
use crate::DetectedEncoding;

// Decode strictly, re-encode, and require the original bytes back. Merely
// decoding under a legacy table is not enough: bytes carrying wide Unicode
// characters would survive the decode and come back rewritten on save.
fn round_trips(encoding: &'static Encoding, buffer: &[u8]) -> bool {
    let text = match encoding.decode_without_bom_handling_and_without_replacement(buffer) {
        Some(text) => text,
        None => return false,
    };
    let (bytes, _, had_unmappable) = encoding.encode(&text);
    !had_unmappable && bytes.as_ref() == buffer
}

// UTF-16 and UTF-32 are only ever decided by their BOMs, so the round-trip
// candidates are the four table-backed encodings.
pub(crate) fn utf8_is_unique_round_trip(buffer: &[u8]) -> bool {
    round_trips(UTF_8, buffer)
        && !round_trips(SHIFT_JIS, buffer)
        && !round_trips(EUC_JP, buffer)
        && !round_trips(ISO_2022_JP, buffer)
}

fn strip_leading<'a>(buffer: &'a [u8], prefix: &[u8]) -> &'a [u8] {
    if buffer.starts_with(prefix) {
        &buffer[prefix.len()..]
    } else {
        buffer
    }
}

/// Decode/encode capability for one detected encoding.
///
/// The table-backed encodings delegate to `encoding_rs`; UTF-16 and UTF-32
/// are decoded by unit here, because `encoding_rs` does not do UTF-32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Table(&'static Encoding),
    Utf16 { big_endian: bool },
    Utf32 { big_endian: bool },
}

impl Codec {
    /// Picks the concrete codec for a tag, reading byte order from the BOM
    /// for the wide encodings (big-endian when no BOM is present).
    pub fn for_buffer(tag: DetectedEncoding, buffer: &[u8]) -> Codec {
        match tag {
            DetectedEncoding::Utf8 => Codec::Table(UTF_8),
            DetectedEncoding::ShiftJis => Codec::Table(SHIFT_JIS),
            DetectedEncoding::Iso2022Jp => Codec::Table(ISO_2022_JP),
            DetectedEncoding::EucJp => Codec::Table(EUC_JP),
            DetectedEncoding::Utf16 => Codec::Utf16 {
                big_endian: !buffer.starts_with(&bom::UTF_16_LE_BOM),
            },
            DetectedEncoding::Utf32 => Codec::Utf32 {
                big_endian: !buffer.starts_with(&bom::UTF_32_LE_BOM),
            },
        }
    }

    /// Strict decode. Strips a leading BOM for the Unicode encodings and
    /// returns `None` on any malformed sequence.
    pub fn try_decode(&self, buffer: &[u8]) -> Option<String> {
        match *self {
            Codec::Table(encoding) => {
                let body = if encoding == UTF_8 {
                    strip_leading(buffer, &bom::UTF_8_BOM)
                } else {
                    buffer
                };
                encoding
                    .decode_without_bom_handling_and_without_replacement(body)
                    .map(Cow::into_owned)
            }
            Codec::Utf16 { big_endian } => {
                let body = strip_leading(
                    buffer,
                    if big_endian {
                        &bom::UTF_16_BE_BOM
                    } else {
                        &bom::UTF_16_LE_BOM
                    },
                );
                if body.len() % 2 != 0 {
                    return None;
                }
                let units = body.chunks_exact(2).map(|pair| {
                    if big_endian {
                        u16::from_be_bytes([pair[0], pair[1]])
                    } else {
                        u16::from_le_bytes([pair[0], pair[1]])
                    }
                });
                std::char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .ok()
            }
            Codec::Utf32 { big_endian } => {
                let body = strip_leading(
                    buffer,
                    if big_endian {
                        &bom::UTF_32_BE_BOM
                    } else {
                        &bom::UTF_32_LE_BOM
                    },
                );
                if body.len() % 4 != 0 {
                    return None;
                }
                body.chunks_exact(4)
                    .map(|quad| {
                        let unit = if big_endian {
                            u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]])
                        } else {
                            u32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]])
                        };
                        std::char::from_u32(unit)
                    })
                    .collect::<Option<String>>()
            }
        }
    }

    /// Encodes editor text back to bytes. The BOM is re-emitted for UTF-16
    /// and UTF-32 so a BOM-carrying file reproduces byte-for-byte; a UTF-8
    /// BOM is never emitted.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match *self {
            Codec::Table(encoding) => {
                let (bytes, _, _) = encoding.encode(text);
                bytes.into_owned()
            }
            Codec::Utf16 { big_endian } => {
                let mut out = Vec::with_capacity(2 + text.len() * 2);
                out.extend_from_slice(if big_endian {
                    &bom::UTF_16_BE_BOM
                } else {
                    &bom::UTF_16_LE_BOM
                });
                for unit in text.encode_utf16() {
                    let pair = if big_endian {
                        unit.to_be_bytes()
                    } else {
                        unit.to_le_bytes()
                    };
                    out.extend_from_slice(&pair);
                }
                out
            }
            Codec::Utf32 { big_endian } => {
                let mut out = Vec::with_capacity(4 + text.len() * 4);
                out.extend_from_slice(if big_endian {
                    &bom::UTF_32_BE_BOM
                } else {
                    &bom::UTF_32_LE_BOM
                });
                for ch in text.chars() {
                    let quad = if big_endian {
                        (ch as u32).to_be_bytes()
                    } else {
                        (ch as u32).to_le_bytes()
                    };
                    out.extend_from_slice(&quad);
                }
                out
            }
        }
    }
}
