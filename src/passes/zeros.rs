//! Leading zero trimming: `:0.5` to `:.5`.

use crate::buffer::Buffer;
use crate::pipeline::Pass;

/// Drops the zero in values like `margin:0.5em`.
///
/// Only the exact three-byte context `:0.` qualifies; a zero inside a
/// larger number (`10.5`) or not directly after a colon is untouched.
pub struct LeadingZero;

impl Pass for LeadingZero {
    fn name(&self) -> &'static str {
        "leading-zero"
    }

    fn apply(&self, buf: &mut Buffer) -> bool {
        let mut changed = false;
        for i in 2..buf.raw_len() {
            if buf.byte(i) == b'.' && buf.byte(i - 1) == b'0' && buf.byte(i - 2) == b':' {
                buf.elide(i - 1);
                changed = true;
            }
        }
        changed
    }
}
