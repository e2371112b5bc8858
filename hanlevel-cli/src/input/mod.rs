//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod records;
pub mod vocab_loader;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use records::{SentenceRecord, SentenceTable};
pub use vocab_loader::VocabularyLoader;
