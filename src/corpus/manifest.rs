use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ContentVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Job,
    Candidate,
}

/// One composed document held by the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub id: String,
    pub kind: DocumentKind,
    pub version: ContentVersion,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub kind: DocumentKind,
    pub version: ContentVersion,
}

/// Point-in-time description of a corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusManifest {
    /// `sha256:<hex>` over `kind:id:version` lines in insertion order.
    pub corpus_version: String,
    pub created_at: DateTime<Utc>, // informational only
    pub document_count: usize,
    pub documents: Vec<ManifestEntry>,
}
