#![forbid(unsafe_code)]

//! Domain types for the vocabulary quiz: word entries, the compiled-in
//! vocabulary table, question records, and end-of-round scoring.

pub mod error;
pub mod model;
pub mod vocabulary;

pub use error::Error;
pub use vocabulary::Vocabulary;
