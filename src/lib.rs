//! Detects the character encoding of a text file buffer so an editor can
//! decode it before display. The closed candidate set is the BOM-marked
//! Unicode encodings, BOM-less UTF-8, and the legacy Japanese encodings
//! Shift_JIS, ISO-2022-JP and EUC-JP; anything else comes back as
//! undetermined and the caller picks its own fallback.

use encoding_rs::Encoding;

mod bom;
mod codec;
mod kanji;
mod utf8;

pub use crate::codec::Codec;

use crate::kanji::Hypothesis;

/// The detected encoding of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectedEncoding {
    Utf8,
    Utf16,
    Utf32,
    ShiftJis,
    Iso2022Jp,
    EucJp,
}

impl DetectedEncoding {
    /// Canonical label for status lines and the like.
    pub fn name(self) -> &'static str {
        match self {
            DetectedEncoding::Utf8 => "UTF-8",
            DetectedEncoding::Utf16 => "UTF-16",
            DetectedEncoding::Utf32 => "UTF-32",
            DetectedEncoding::ShiftJis => "Shift_JIS",
            DetectedEncoding::Iso2022Jp => "ISO-2022-JP",
            DetectedEncoding::EucJp => "EUC-JP",
        }
    }
}

/// Detects the encoding of `buffer`, or returns `None` when the bytes fit
/// none of the supported encodings.
///
/// The stages run in fixed priority order: a BOM is authoritative; UTF-8 is
/// accepted early when it is the only encoding that reproduces the bytes on
/// a decode/re-encode round trip; the legacy scan then short-circuits on
/// ISO-2022-JP and EUC-JP evidence; structurally valid UTF-8 is accepted
/// next; Shift_JIS is the last, least certain fallback because its byte
/// ranges overlap malformed and binary data.
///
/// The empty buffer detects as UTF-8 by convention (the empty string round
/// trips under every candidate).
pub fn detect(buffer: &[u8]) -> Option<DetectedEncoding> {
    if let Some(tag) = bom::sniff(buffer) {
        return Some(tag);
    }
    // All-ASCII buffers without an escape byte cannot pick up legacy or
    // multi-byte evidence later in the pipeline, so answer without running
    // the decoders.
    if Encoding::ascii_valid_up_to(buffer) == buffer.len()
        && memchr::memchr(0x1B, buffer).is_none()
    {
        return Some(DetectedEncoding::Utf8);
    }
    if codec::utf8_is_unique_round_trip(buffer) {
        return Some(DetectedEncoding::Utf8);
    }
    let hypothesis = kanji::scan(buffer);
    match hypothesis {
        Hypothesis::NewJis | Hypothesis::OldJis | Hypothesis::NecJis => {
            return Some(DetectedEncoding::Iso2022Jp);
        }
        Hypothesis::Euc => {
            return Some(DetectedEncoding::EucJp);
        }
        Hypothesis::Ascii | Hypothesis::EucOrShiftJis | Hypothesis::ShiftJis => {}
    }
    if utf8::is_structurally_valid(buffer) {
        return Some(DetectedEncoding::Utf8);
    }
    match hypothesis {
        // The unresolved EUC-or-Shift_JIS tie defaults to Shift_JIS once
        // structural UTF-8 has failed too.
        Hypothesis::ShiftJis | Hypothesis::EucOrShiftJis => Some(DetectedEncoding::ShiftJis),
        _ => None,
    }
}
