pub mod normalize;
pub mod word;
pub mod regions;
pub mod data;
pub mod lexicon;
pub mod language;
pub mod languages;
pub mod fixture;

pub use language::Language;
pub use languages::Stemmer;
pub use languages::english::{stem, EnglishStemmer};
pub use languages::undetermined::UndeterminedStemmer;
pub use lexicon::Lexicon;
pub use normalize::normalize;
