//! Whitespace trimming around `{`, `:`, `;` and `,`.

use crate::buffer::Buffer;
use crate::pipeline::Pass;

fn is_delimiter(b: u8) -> bool {
    matches!(b, b'{' | b':' | b';' | b',')
}

/// Elides spaces adjacent to structural delimiters.
///
/// For each delimiter found left to right: the run of spaces immediately
/// following it is elided unconditionally; the run immediately preceding it
/// is elided only when the delimiter is not `:`. Space before a colon stays
/// because `a :hover` and `a:hover` select different things, and this tool
/// has no selector knowledge to tell them apart. Scanning resumes past the
/// trailing run just processed, so no span is handled twice.
pub struct DelimiterWhitespace;

impl Pass for DelimiterWhitespace {
    fn name(&self) -> &'static str {
        "delimiter-whitespace"
    }

    fn apply(&self, buf: &mut Buffer) -> bool {
        let mut changed = false;
        let mut i = 0;
        while i < buf.raw_len() {
            let b = buf.byte(i);
            if !is_delimiter(b) {
                i += 1;
                continue;
            }

            // Trailing run of spaces.
            let mut after = i + 1;
            while buf.get(after) == Some(b' ') {
                buf.elide(after);
                changed = true;
                after += 1;
            }

            // Leading run, except before a colon.
            if b != b':' {
                let mut before = i;
                while before > 0 && buf.byte(before - 1) == b' ' {
                    buf.elide(before - 1);
                    changed = true;
                    before -= 1;
                }
            }

            i = after;
        }
        changed
    }
}
