//! Empty declaration block removal: `b{}` and its selector are deleted.

use crate::buffer::Buffer;
use crate::pipeline::Pass;

/// Removes `{}` blocks together with their dangling selectors.
///
/// A match is a surviving `{` whose next surviving byte is `}`. The pass
/// walks backward over survivors to the nearest preceding `}` (or the start
/// of the buffer) and elides everything after that boundary through the
/// matched pair, taking the selector with it. The scan then resumes past
/// the match; removing one block can expose another further on, which the
/// same sweep picks up, but a handled match is never revisited.
pub struct EmptyBlockRemoval;

impl Pass for EmptyBlockRemoval {
    fn name(&self) -> &'static str {
        "empty-block-removal"
    }

    fn apply(&self, buf: &mut Buffer) -> bool {
        let mut changed = false;
        let mut i = 0;
        while i < buf.raw_len() {
            if buf.is_elided(i) || buf.byte(i) != b'{' {
                i += 1;
                continue;
            }
            let Some(close) = buf.next_live(i + 1) else {
                break;
            };
            if buf.byte(close) != b'}' {
                i += 1;
                continue;
            }

            // Selector starts just after the previous block's close.
            let from = match (0..i).rev().find(|&j| !buf.is_elided(j) && buf.byte(j) == b'}') {
                Some(boundary) => boundary + 1,
                None => 0,
            };
            buf.elide_range(from..=close);
            changed = true;
            i = close + 1;
        }
        changed
    }
}
