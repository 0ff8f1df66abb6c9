pub mod article;
pub mod clustering;
pub mod environment;
pub mod lexicon;
pub mod logging;
pub mod newsdata;
pub mod render;
pub mod signal;
pub mod summary;
pub mod text;
pub mod topics;

pub use article::ArticleRecord;
pub use lexicon::Lexicons;
pub use summary::{build_clean_paragraph, Summarizer, SummaryParams};

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_PIPELINE: &str = "pipeline";
