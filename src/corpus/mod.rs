pub mod corpus;
pub mod manifest;

pub use corpus::{Corpus, CorpusError};
pub use manifest::{CorpusDocument, CorpusManifest, DocumentKind, ManifestEntry};
