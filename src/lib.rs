//! cssmin - a naive CSS minifier.
//!
//! Reduces a stylesheet's byte size by lexical rewriting alone: comments,
//! redundant whitespace and redundant punctuation are removed, and some
//! syntax is replaced with shorter equivalents (`rgb()` calls, repeating
//! hex triplets, leading zeros). No syntax tree is ever built and nothing
//! is validated; valid input keeps its rendered meaning and only loses
//! bytes.
//!
//! The interesting machinery is the [`pipeline::Pipeline`]: eight ordered
//! [`pipeline::Pass`] implementations over a [`buffer::Buffer`] that marks
//! deletions out-of-band and compacts between passes.

pub mod buffer;
pub mod passes;
pub mod pipeline;
pub mod report;

pub use buffer::Buffer;
pub use pipeline::{minify, minify_bytes, Pass, Pipeline};
pub use report::{MinifyStats, NullSink, PassReport, ReportSink};
