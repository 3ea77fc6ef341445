//! Text normalization

pub mod tokenizer;
