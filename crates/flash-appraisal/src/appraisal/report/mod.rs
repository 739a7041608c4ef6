mod summary;
mod text;
pub mod views;

pub use summary::{
    Highlights, RankedCriterion, ATTENTION_MAX_SCORE, HIGHLIGHT_LIMIT, STRENGTH_MIN_SCORE,
};
pub use text::REPORT_HEADER;

pub(crate) use text::{render_breakdown, render_report};
