//! Comment stripping: elide `/* ... */` spans.

use crate::buffer::Buffer;
use crate::pipeline::Pass;

/// Removes block comments.
///
/// Repeatedly finds the next `/*`, then the next `*/` at or after it, and
/// elides the whole span inclusive. An opener with no closer is treated as
/// a comment extending to end-of-buffer; the scan never reads past the end.
/// Scanning resumes after the closer, so a `/*` formed by a deletion is not
/// reconsidered within this pass.
pub struct CommentRemoval;

impl Pass for CommentRemoval {
    fn name(&self) -> &'static str {
        "comment-removal"
    }

    fn apply(&self, buf: &mut Buffer) -> bool {
        let mut changed = false;
        let mut pos = 0;
        while let Some(open) = buf.find(b"/*", pos) {
            match buf.find(b"*/", open + 2) {
                Some(close) => {
                    buf.elide_range(open..=close + 1);
                    changed = true;
                    pos = close + 2;
                }
                None => {
                    // Unterminated comment: runs to end-of-buffer.
                    buf.elide_range(open..=buf.raw_len() - 1);
                    changed = true;
                    break;
                }
            }
        }
        changed
    }
}
