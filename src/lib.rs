//! Deterministic candidate-job matching engine.
//!
//! `match-core` scores a candidate against a job by blending term-frequency
//! cosine similarity of their composed texts with explicit skill coverage,
//! parses free-text resumes into structured fragments, and generates
//! interview questions from skill gaps. Every operation is a pure function of
//! its inputs: identical inputs always produce identical outputs, and no
//! operation fails on malformed data.

pub mod config;
pub mod corpus;
pub mod interview;
pub mod resume;
pub mod scoring;
pub mod text;
pub mod types;

pub use config::{ConfigError, EngineConfig};
pub use types::{
    CandidateProfile, JobDescriptor, MatchResult, Question, ResumeProfile,
};

use interview::QuestionGenerator;
use resume::ResumeParser;
use scoring::MatchEngine;

/// Scores `candidate` against `job` with the default configuration.
///
/// `None` for either argument means the entity was not found; the result is
/// then a zero score with empty skill lists.
pub fn compute_match(
    job: Option<&JobDescriptor>,
    candidate: Option<&CandidateProfile>,
) -> MatchResult {
    MatchEngine::default().compute(job, candidate)
}

/// Interview questions for `candidate` applying to `job`; empty when either is absent.
pub fn generate_interview_questions(
    job: Option<&JobDescriptor>,
    candidate: Option<&CandidateProfile>,
) -> Vec<Question> {
    QuestionGenerator::default().generate(job, candidate)
}

/// Parses raw resume text with the default configuration.
pub fn parse_resume(raw_text: &str) -> ResumeProfile {
    ResumeParser::default().parse(raw_text)
}
