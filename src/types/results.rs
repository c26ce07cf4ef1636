use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::identifiers::{CandidateId, JobId};
use super::skills::SkillSet;

/// Outcome of matching one candidate against one job.
///
/// Invariants:
/// - `0 <= score <= 100`
/// - `matched_skills` restricted to the job's required skills, together with
///   `missing_skills`, is exactly the required set, with no overlap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: JobId,
    pub candidate_id: CandidateId,
    pub score: u32,
    /// Required skills the candidate has, then nice-to-have skills the candidate has.
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// The components a score was built from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Cosine similarity of the composed texts, in [0, 1].
    pub similarity: f64,
    /// Skill bonus, in [0, 1].
    pub skill_bonus: f64,
    pub required_match_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Technical,
    Behavioral,
    Leadership,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    SkillGap,
    Experience,
    LearningAbility,
    ProblemSolving,
    Leadership,
}

/// A generated interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub skill: Option<String>,
    pub question: String,
    pub difficulty: Difficulty,
    pub category: QuestionCategory,
}

/// Structured fragment extracted from raw resume text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProfile {
    /// Always a subset of the known skill vocabulary.
    pub skills: SkillSet,
    /// 0 when no experience statement was found.
    pub experience_years: u32,
    pub education: BTreeSet<String>,
    /// Meaningful terms in document order, truncated.
    pub processed_terms: Vec<String>,
    /// The input, verbatim.
    pub raw_text: String,
}

impl ResumeProfile {
    /// The all-default profile for `raw_text`.
    pub fn empty(raw_text: impl Into<String>) -> Self {
        ResumeProfile {
            raw_text: raw_text.into(),
            ..Default::default()
        }
    }
}
