//! Whitespace normalization: drop tabs and newlines, collapse space runs.

use crate::buffer::Buffer;
use crate::pipeline::Pass;

/// Collapses whitespace in a single left-to-right sweep.
///
/// Tabs and newlines are always elided, never replaced by a space. A space
/// is elided when the last surviving byte so far is itself a space, or when
/// nothing has survived yet - so a leading run of whitespace vanishes
/// entirely while interior runs collapse to exactly one space.
pub struct WhitespaceCollapse;

impl Pass for WhitespaceCollapse {
    fn name(&self) -> &'static str {
        "whitespace-collapse"
    }

    fn apply(&self, buf: &mut Buffer) -> bool {
        let mut changed = false;
        let mut last_survivor: Option<u8> = None;
        for i in 0..buf.raw_len() {
            match buf.byte(i) {
                b'\t' | b'\n' => {
                    buf.elide(i);
                    changed = true;
                }
                b' ' if matches!(last_survivor, None | Some(b' ')) => {
                    buf.elide(i);
                    changed = true;
                }
                b => last_survivor = Some(b),
            }
        }
        changed
    }
}
