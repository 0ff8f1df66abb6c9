//! Text cleanup shared by every stage of the pipeline.

mod normalizer;
mod tokenizer;

pub use self::normalizer::normalize;
pub use self::tokenizer::Tokenizer;
