//! Hex triplet shortening: `#ff0000` to `#f00`.

use crate::buffer::Buffer;
use crate::pipeline::Pass;

fn is_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Shortens six-digit hex colors whose channel pairs repeat.
///
/// A `#` matches when exactly six hex digits follow (the seventh character,
/// or end-of-buffer, must not be a hex digit) and every channel pair is
/// internally equal: `#rrggbb` becomes `#rgb`. Any unequal pair or short
/// digit run leaves the sequence untouched. Existing digit case is kept;
/// nothing is lowercased here.
pub struct HexShorten;

impl Pass for HexShorten {
    fn name(&self) -> &'static str {
        "hex-shorten"
    }

    fn apply(&self, buf: &mut Buffer) -> bool {
        let mut changed = false;
        let mut pos = 0;
        while let Some(hash) = buf.find(b"#", pos) {
            pos = hash + 1;
            if buf.raw_len() < hash + 7 {
                // Not enough room for six digits; later hashes have less.
                break;
            }
            let digits: Vec<u8> = (hash + 1..hash + 7).map(|i| buf.byte(i)).collect();
            if !digits.iter().all(|&d| is_hex(d)) {
                continue;
            }
            // Boundary: a seventh hex digit means this is not a 6-digit
            // color (e.g. an 8-digit #rrggbbaa); end-of-buffer qualifies.
            if buf.get(hash + 7).is_some_and(is_hex) {
                continue;
            }
            if digits[0] != digits[1] || digits[2] != digits[3] || digits[4] != digits[5] {
                continue;
            }
            buf.set(hash + 1, digits[0]);
            buf.set(hash + 2, digits[2]);
            buf.set(hash + 3, digits[4]);
            buf.elide_range(hash + 4..=hash + 6);
            changed = true;
            pos = hash + 7;
        }
        changed
    }
}
