//! Turns a feed snapshot into a short briefing paragraph.

mod narrative;
mod params;
mod representative;

pub use self::narrative::{
    build_clean_paragraph, Briefing, BriefingLine, Corpus, Storyline, Summarizer, CLOSING_SENTENCE,
    INSUFFICIENT_SIGNAL, NO_HEADLINES, OPENING_SENTENCE,
};
pub use self::params::{parse_threshold, SummaryParams};
pub use self::representative::representative_title;
