pub mod stop_words;
pub mod tokenizer;

pub use stop_words::StopWords;
pub use tokenizer::Normalizer;
