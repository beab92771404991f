// Single forward pass over the buffer, strengthening a hypothesis about
// which legacy Japanese encoding the bytes are in. The hypothesis never
// weakens: `Ascii` may become `EucOrShiftJis`, and every other variant is
// terminal and returned on the spot. Every lookahead is a bounds-checked
// `get`; running out of input mid-sequence ends the scan with the
// hypothesis held so far.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hypothesis {
    Ascii,
    EucOrShiftJis,
    ShiftJis,
    Euc,
    NewJis,
    OldJis,
    NecJis,
}

pub(crate) fn scan(buffer: &[u8]) -> Hypothesis {
    let mut hypothesis = Hypothesis::Ascii;
    let mut i = 0;
    while let Some(&byte) = buffer.get(i) {
        match byte {
            0x00 => {
                i += 1;
            }
            0x1B => match (buffer.get(i + 1).copied(), buffer.get(i + 2).copied()) {
                (Some(0x24), Some(0x42)) => return Hypothesis::NewJis,
                (Some(0x24), Some(0x40)) => return Hypothesis::OldJis,
                (Some(0x4B), _) => return Hypothesis::NecJis,
                // Not a JIS introducer (or truncated); resume after the ESC
                // and let the following bytes speak for themselves.
                _ => {
                    i += 1;
                }
            },
            0x81..=0x8D | 0x8F..=0x9F => return Hypothesis::ShiftJis,
            // SS2: a single-shift pair in EUC, but most trail values only
            // occur as Shift_JIS lead/trail combinations.
            0x8E => match buffer.get(i + 1).copied() {
                Some(0x40..=0x7E) | Some(0x80..=0xA0) | Some(0xE0..=0xFC) => {
                    return Hypothesis::ShiftJis;
                }
                Some(0xA1..=0xDF) => {
                    hypothesis = Hypothesis::EucOrShiftJis;
                    i += 2;
                }
                Some(_) => {
                    i += 2;
                }
                None => return hypothesis,
            },
            0xA1..=0xDF => match buffer.get(i + 1).copied() {
                Some(0xF0..=0xFE) => return Hypothesis::Euc,
                Some(0xA1..=0xDF) => {
                    hypothesis = Hypothesis::EucOrShiftJis;
                    i += 2;
                }
                Some(0xE0..=0xEF) => {
                    // Either an EUC pair or a Shift_JIS pair straddling this
                    // position; scan ahead until some byte settles it.
                    hypothesis = Hypothesis::EucOrShiftJis;
                    i += 2;
                    while let Some(&ahead) = buffer.get(i) {
                        if ahead < 0x40 {
                            break;
                        }
                        match ahead {
                            0x81..=0x8D | 0x8F..=0x9F => return Hypothesis::ShiftJis,
                            0xFD | 0xFE => return Hypothesis::Euc,
                            _ => i += 1,
                        }
                    }
                }
                Some(trail) if trail <= 0x9F => return Hypothesis::ShiftJis,
                Some(_) => {
                    i += 2;
                }
                None => return hypothesis,
            },
            0xF0..=0xFE => return Hypothesis::Euc,
            0xE0..=0xEF => match buffer.get(i + 1).copied() {
                Some(0x40..=0x7E) | Some(0x80..=0xA0) => return Hypothesis::ShiftJis,
                Some(0xFD) | Some(0xFE) => return Hypothesis::Euc,
                Some(0xA1..=0xFC) => {
                    hypothesis = Hypothesis::EucOrShiftJis;
                    i += 2;
                }
                Some(_) => {
                    i += 2;
                }
                None => return hypothesis,
            },
            _ => {
                i += 1;
            }
        }
    }
    hypothesis
}
