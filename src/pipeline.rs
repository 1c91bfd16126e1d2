//! The minification pipeline: the [`Pass`] trait and the [`Pipeline`]
//! orchestrator that runs the eight passes in their fixed order.
//!
//! Each pass is a pure byte-pattern rewrite over a [`Buffer`]. Passes elide
//! positions rather than shifting the tail; the pipeline compacts the buffer
//! after any pass that reported a change, so every pass can assume the text
//! it scans is contiguous and marker-free.
//!
//! # Example
//!
//! ```
//! use cssmin::minify;
//!
//! let out = minify("a {  color : red ; }\n");
//! assert_eq!(out, "a{color :red}");
//! ```

use crate::buffer::Buffer;
use crate::passes;
use crate::report::{NullSink, PassReport, ReportSink};

/// One independent, ordered text-rewrite step.
///
/// Contract: the buffer passed to [`Pass::apply`] is compact (no elided
/// positions). The pass may elide positions and substitute bytes, and
/// returns `true` iff it did either. Passes never fail; absence of a
/// pattern is always a legitimate no-op.
pub trait Pass {
    /// Stable kebab-case name, used for reporting and logs.
    fn name(&self) -> &'static str;

    /// Apply this pass to the buffer.
    fn apply(&self, buf: &mut Buffer) -> bool;
}

/// The fixed sequence of minification passes.
///
/// Order matters: each pass's correctness depends on earlier passes'
/// normalization (delimiter trimming assumes comments are gone, the hex
/// shortener assumes `rgb()` has already been rewritten, and so on).
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    /// The standard eight-pass pipeline in its fixed order.
    pub fn standard() -> Self {
        Self {
            passes: passes::standard(),
        }
    }

    /// Number of passes in the pipeline.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// True if the pipeline has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every pass in order over `input` and return the surviving bytes.
    ///
    /// After each pass the buffer is compacted (if the pass changed
    /// anything) and a [`PassReport`] is delivered to `sink`. The sink is
    /// purely observational and never influences control flow.
    pub fn run(&self, input: &[u8], sink: &mut dyn ReportSink) -> Vec<u8> {
        let mut buf = Buffer::new(input);
        for (index, pass) in self.passes.iter().enumerate() {
            let bytes_before = buf.len();
            let changed = pass.apply(&mut buf);
            if changed {
                buf.compact();
            }
            debug_assert!(buf.is_compact());
            let bytes_after = buf.len();
            tracing::debug!(
                pass = pass.name(),
                bytes_before,
                bytes_after,
                changed,
                "pass complete"
            );
            sink.pass_complete(&PassReport {
                index,
                name: pass.name(),
                bytes_before,
                bytes_after,
            });
        }
        buf.into_bytes()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Minify a stylesheet given as raw bytes.
pub fn minify_bytes(input: &[u8]) -> Vec<u8> {
    Pipeline::standard().run(input, &mut NullSink)
}

/// Minify a stylesheet given as a string.
///
/// All patterns and rewrites are ASCII, so valid UTF-8 in means valid
/// UTF-8 out; the checked conversion is kept anyway, with a lossy fallback
/// instead of a panic.
pub fn minify(input: &str) -> String {
    let out = minify_bytes(input.as_bytes());
    String::from_utf8(out)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
