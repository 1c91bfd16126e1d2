//! Pass reporting: the observational boundary between the pipeline and
//! whatever renders progress or savings.
//!
//! The pipeline hands a [`PassReport`] to a [`ReportSink`] after every pass.
//! Sinks never influence control flow; the library ships a discarding
//! [`NullSink`] and a collecting [`MinifyStats`], and the CLI renders the
//! collected stats as text or JSON.

use serde::Serialize;

/// What the pipeline reports after one pass.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PassReport {
    /// Zero-based position of the pass in the pipeline.
    pub index: usize,
    /// The pass's stable kebab-case name.
    pub name: &'static str,
    /// Surviving bytes before the pass ran.
    pub bytes_before: usize,
    /// Surviving bytes after the pass ran (and the buffer compacted).
    pub bytes_after: usize,
}

impl PassReport {
    /// Bytes this pass removed.
    pub fn saved(&self) -> usize {
        self.bytes_before - self.bytes_after
    }
}

/// Receives per-pass reports. Purely observational.
pub trait ReportSink {
    fn pass_complete(&mut self, report: &PassReport);
}

/// A sink that discards every report.
pub struct NullSink;

impl ReportSink for NullSink {
    fn pass_complete(&mut self, _report: &PassReport) {}
}

/// Collects every report for later rendering.
#[derive(Debug, Default, Serialize)]
pub struct MinifyStats {
    pub passes: Vec<PassReport>,
}

impl MinifyStats {
    /// Input size as seen by the first pass, if any pass ran.
    pub fn input_bytes(&self) -> usize {
        self.passes.first().map_or(0, |r| r.bytes_before)
    }

    /// Output size left by the last pass, if any pass ran.
    pub fn output_bytes(&self) -> usize {
        self.passes.last().map_or(0, |r| r.bytes_after)
    }

    /// Total bytes removed across all passes.
    pub fn total_saved(&self) -> usize {
        self.input_bytes() - self.output_bytes()
    }
}

impl ReportSink for MinifyStats {
    fn pass_complete(&mut self, report: &PassReport) {
        self.passes.push(*report);
    }
}
