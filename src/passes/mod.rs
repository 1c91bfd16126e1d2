//! The eight minification passes, one module per pass.
//!
//! Every pass follows the same contract (see [`Pass`]): scan a compact
//! buffer, elide or substitute bytes, report whether anything changed.
//! [`standard`] yields them in the pipeline's fixed order.

pub mod blocks;
pub mod comments;
pub mod delimiters;
pub mod hex;
pub mod rgb;
pub mod semicolons;
pub mod whitespace;
pub mod zeros;

pub use blocks::EmptyBlockRemoval;
pub use comments::CommentRemoval;
pub use delimiters::DelimiterWhitespace;
pub use hex::HexShorten;
pub use rgb::RgbToHex;
pub use semicolons::SemicolonCleanup;
pub use whitespace::WhitespaceCollapse;
pub use zeros::LeadingZero;

use crate::pipeline::Pass;

/// The standard passes in their fixed pipeline order.
///
/// The order is not reorderable: delimiter trimming assumes whitespace has
/// already collapsed to single spaces, the hex shortener assumes `rgb()`
/// calls have already been rewritten to `#rrggbb`, and empty-block removal
/// runs last so that blocks emptied by the other passes are caught.
pub fn standard() -> Vec<Box<dyn Pass>> {
    vec![
        Box::new(WhitespaceCollapse),
        Box::new(CommentRemoval),
        Box::new(DelimiterWhitespace),
        Box::new(RgbToHex),
        Box::new(HexShorten),
        Box::new(LeadingZero),
        Box::new(SemicolonCleanup),
        Box::new(EmptyBlockRemoval),
    ]
}
