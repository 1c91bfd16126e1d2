//! Color function collapse: `rgb(255,0,0)` to `#ff0000`.

use crate::buffer::Buffer;
use crate::pipeline::Pass;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Rewrites `rgb(r,g,b)` calls to 7-byte `#rrggbb` literals.
///
/// A match needs a closing `)` before end-of-buffer and two `,` separators
/// inside it; anything else is a non-match and the scan moves on past the
/// opener. Channels parse permissively - as many leading decimal digits as
/// are present, otherwise 0 - and are clamped to [0, 255], so out-of-range
/// input yields well-formed (if saturated) output rather than a malformed
/// literal. The minimal span `rgb(,,)` is exactly seven bytes, so the
/// replacement always fits in place.
pub struct RgbToHex;

impl RgbToHex {
    /// Leading-digit parse, clamped to a byte.
    fn channel(buf: &Buffer, mut i: usize, end: usize) -> u8 {
        let mut value: u32 = 0;
        while i < end && buf.byte(i).is_ascii_digit() {
            value = value * 10 + u32::from(buf.byte(i) - b'0');
            if value > 255 {
                return 255;
            }
            i += 1;
        }
        value as u8
    }

    fn write_hex(buf: &mut Buffer, at: usize, value: u8) {
        buf.set(at, HEX_DIGITS[usize::from(value >> 4)]);
        buf.set(at + 1, HEX_DIGITS[usize::from(value & 0x0f)]);
    }
}

impl Pass for RgbToHex {
    fn name(&self) -> &'static str {
        "rgb-to-hex"
    }

    fn apply(&self, buf: &mut Buffer) -> bool {
        let mut changed = false;
        let mut pos = 0;
        while let Some(start) = buf.find(b"rgb(", pos) {
            let args = start + 4;
            let Some(close) = buf.find(b")", args) else {
                // Never closed; nothing after this can match either.
                break;
            };
            let Some(comma1) = buf.find(b",", args).filter(|&c| c < close) else {
                pos = args;
                continue;
            };
            let Some(comma2) = buf.find(b",", comma1 + 1).filter(|&c| c < close) else {
                pos = args;
                continue;
            };

            let r = Self::channel(buf, args, comma1);
            let g = Self::channel(buf, comma1 + 1, comma2);
            let b = Self::channel(buf, comma2 + 1, close);

            buf.set(start, b'#');
            Self::write_hex(buf, start + 1, r);
            Self::write_hex(buf, start + 3, g);
            Self::write_hex(buf, start + 5, b);
            if start + 7 <= close {
                buf.elide_range(start + 7..=close);
            }
            changed = true;
            pos = close + 1;
        }
        changed
    }
}
