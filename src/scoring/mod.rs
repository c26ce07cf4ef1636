pub mod recommend;
pub mod similarity;
pub mod skills;
pub mod vector;

use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::text::{compose_candidate_text, compose_job_text};
use crate::types::{CandidateProfile, JobDescriptor, MatchResult, ScoreBreakdown};
pub use recommend::build_recommendations;
pub use similarity::{CosineSimilarity, Similarity};
pub use skills::{partition_skills, required_match_ratio, skill_bonus};
pub use vector::TermVector;

/// Scores one job against one candidate.
///
/// Stateless apart from its configuration: any number of threads may share
/// one engine and call `compute` concurrently.
pub struct MatchEngine<S> {
    similarity: S,
    config: EngineConfig,
}

impl Default for MatchEngine<CosineSimilarity> {
    fn default() -> Self {
        Self {
            similarity: CosineSimilarity,
            config: EngineConfig::v0(),
        }
    }
}

impl<S> MatchEngine<S>
where
    S: Similarity,
{
    pub fn new(similarity: S, config: EngineConfig) -> Self {
        Self { similarity, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the match. An absent job or candidate yields a zero-score
    /// result with empty skill lists instead of an error.
    pub fn compute(
        &self,
        job: Option<&JobDescriptor>,
        candidate: Option<&CandidateProfile>,
    ) -> MatchResult {
        match (job, candidate) {
            (Some(job), Some(candidate)) => self.score_pair(job, candidate),
            (job, candidate) => {
                warn!(
                    job_present = job.is_some(),
                    candidate_present = candidate.is_some(),
                    "match requested without both entities; returning neutral result"
                );
                MatchResult {
                    job_id: job.map(|j| j.id.clone()).unwrap_or_default(),
                    candidate_id: candidate.map(|c| c.id.clone()).unwrap_or_default(),
                    recommendations: vec![recommend::NOT_FOUND_NOTE.to_string()],
                    ..Default::default()
                }
            }
        }
    }

    fn score_pair(&self, job: &JobDescriptor, candidate: &CandidateProfile) -> MatchResult {
        // 1. Text similarity
        let job_vector = TermVector::from_text(&compose_job_text(job));
        let candidate_vector = TermVector::from_text(&compose_candidate_text(candidate));
        trace!(
            job_terms = job_vector.len(),
            candidate_terms = candidate_vector.len(),
            "vectorized documents"
        );
        let similarity = self.similarity.bounded(&job_vector, &candidate_vector);

        // 2. Skill signals
        let ratio = required_match_ratio(&job.required_skills, &candidate.skills);
        let bonus = skill_bonus(
            &job.required_skills,
            &job.nice_to_have_skills,
            &candidate.skills,
            &self.config,
        );

        // 3. Blend
        let score = self.blend(similarity, bonus);

        let (matched_skills, missing_skills) = partition_skills(job, candidate);
        let recommendations = build_recommendations(candidate, &missing_skills);

        debug!(
            job_id = job.id.as_str(),
            candidate_id = candidate.id.as_str(),
            similarity,
            skill_bonus = bonus,
            score,
            "computed match"
        );

        MatchResult {
            job_id: job.id.clone(),
            candidate_id: candidate.id.clone(),
            score,
            matched_skills,
            missing_skills,
            recommendations,
            breakdown: ScoreBreakdown {
                similarity,
                skill_bonus: bonus,
                required_match_ratio: ratio,
            },
        }
    }

    fn blend(&self, similarity: f64, bonus: f64) -> u32 {
        let raw = similarity * self.config.similarity_weight + bonus * self.config.skill_weight;
        if !raw.is_finite() {
            return 0;
        }
        let score = raw.round().clamp(0.0, 100.0) as u32;
        debug_assert!(score <= 100, "score {score} out of range [0, 100]");
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_uses_configured_weights() {
        let engine = MatchEngine::default();
        assert_eq!(engine.blend(1.0, 1.0), 100);
        assert_eq!(engine.blend(0.0, 0.0), 0);
        assert_eq!(engine.blend(0.5, 1.0), 65);
        assert_eq!(engine.blend(f64::NAN, 1.0), 0);
    }

    #[test]
    fn absent_candidate_is_neutral() {
        let job = JobDescriptor {
            id: "JOB-1".into(),
            required_skills: ["rust"].into_iter().collect(),
            ..Default::default()
        };
        let result = MatchEngine::default().compute(Some(&job), None);
        assert_eq!(result.score, 0);
        assert_eq!(result.job_id.as_str(), "JOB-1");
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }
}
