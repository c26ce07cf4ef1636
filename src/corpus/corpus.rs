// Append-only. Scoring never reads from here; the corpus only exists so
// corpus-wide statistics can be added later without changing callers.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use super::manifest::{CorpusDocument, CorpusManifest, DocumentKind, ManifestEntry};
use crate::scoring::TermVector;
use crate::text::{compose_candidate_text, compose_job_text};
use crate::types::{CandidateProfile, ContentVersion, JobDescriptor};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Corpus lock poisoned by a panicking writer")]
    Poisoned,
    #[error("Duplicate document: {kind:?} {id}")]
    DuplicateDocument { kind: DocumentKind, id: String },
}

/// Accumulated job and candidate documents.
///
/// Appends are serialized behind a mutex, so one corpus can be shared across
/// threads through an `Arc`.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Mutex<Vec<CorpusDocument>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<CorpusDocument>>, CorpusError> {
        self.documents.lock().map_err(|_| CorpusError::Poisoned)
    }

    /// Appends a document. `(kind, id)` pairs must be unique.
    pub fn add(
        &self,
        id: impl Into<String>,
        kind: DocumentKind,
        text: impl Into<String>,
    ) -> Result<ContentVersion, CorpusError> {
        let id = id.into();
        let text = text.into();
        let version = ContentVersion::from_content(text.as_bytes());

        let mut documents = self.lock()?;
        if documents.iter().any(|doc| doc.kind == kind && doc.id == id) {
            return Err(CorpusError::DuplicateDocument { kind, id });
        }

        debug!(id = id.as_str(), ?kind, version = version.as_str(), "corpus append");
        documents.push(CorpusDocument {
            id,
            kind,
            version: version.clone(),
            text,
        });
        Ok(version)
    }

    pub fn add_job(&self, job: &JobDescriptor) -> Result<ContentVersion, CorpusError> {
        self.add(job.id.as_str(), DocumentKind::Job, compose_job_text(job))
    }

    pub fn add_candidate(&self, candidate: &CandidateProfile) -> Result<ContentVersion, CorpusError> {
        self.add(
            candidate.id.as_str(),
            DocumentKind::Candidate,
            compose_candidate_text(candidate),
        )
    }

    pub fn len(&self) -> Result<usize, CorpusError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CorpusError> {
        Ok(self.lock()?.is_empty())
    }

    /// Copy of the documents in insertion order.
    pub fn snapshot(&self) -> Result<Vec<CorpusDocument>, CorpusError> {
        Ok(self.lock()?.clone())
    }

    /// Number of documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> Result<usize, CorpusError> {
        let term = term.to_lowercase();
        let documents = self.lock()?;
        Ok(documents
            .iter()
            .filter(|doc| TermVector::from_text(&doc.text).count(&term) > 0)
            .count())
    }

    pub fn manifest(&self) -> Result<CorpusManifest, CorpusError> {
        let documents = self.lock()?;

        let mut version_hasher = Sha256::new();
        let entries: Vec<ManifestEntry> = documents
            .iter()
            .map(|doc| {
                let kind = match doc.kind {
                    DocumentKind::Job => "job",
                    DocumentKind::Candidate => "candidate",
                };
                let line = format!("{kind}:{}:{}\n", doc.id, doc.version.as_str());
                version_hasher.update(line.as_bytes());

                ManifestEntry {
                    id: doc.id.clone(),
                    kind: doc.kind,
                    version: doc.version.clone(),
                }
            })
            .collect();

        Ok(CorpusManifest {
            corpus_version: format!("sha256:{}", hex::encode(version_hasher.finalize())),
            created_at: Utc::now(),
            document_count: entries.len(),
            documents: entries,
        })
    }
}
