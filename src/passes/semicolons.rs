//! Redundant semicolon removal: collapse `;;` runs, drop `;` before `}`.

use crate::buffer::Buffer;
use crate::pipeline::Pass;

/// Elides semicolons that carry no meaning.
///
/// Two independent rules, both judged against the nearest *surviving*
/// predecessor so they compose within one sweep: a `;` whose surviving
/// predecessor is another `;` is elided (runs collapse to one), and a `;`
/// whose surviving successor is `}` is elided (a separator before a block
/// close is unnecessary). `a{color:red;;}` therefore loses both semicolons
/// in this single pass.
pub struct SemicolonCleanup;

impl Pass for SemicolonCleanup {
    fn name(&self) -> &'static str {
        "semicolon-cleanup"
    }

    fn apply(&self, buf: &mut Buffer) -> bool {
        let mut changed = false;
        for i in 1..buf.raw_len() {
            let prev = buf.prev_live(i);
            match buf.byte(i) {
                b';' if prev.map(|p| buf.byte(p)) == Some(b';') => {
                    buf.elide(i);
                    changed = true;
                }
                b'}' => {
                    if let Some(p) = prev {
                        if buf.byte(p) == b';' {
                            buf.elide(p);
                            changed = true;
                        }
                    }
                }
                _ => {}
            }
        }
        changed
    }
}
