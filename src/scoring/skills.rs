use crate::config::EngineConfig;
use crate::types::{CandidateProfile, JobDescriptor, SkillSet};

/// Share of required skills the candidate covers.
///
/// An empty requirement list counts as full coverage.
pub fn required_match_ratio(required: &SkillSet, candidate: &SkillSet) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    required.overlap(candidate) as f64 / required.len() as f64
}

/// Skill bonus in [0, 1]: required coverage plus a fixed step per matched
/// nice-to-have skill, capped at 1.
pub fn skill_bonus(
    required: &SkillSet,
    nice_to_have: &SkillSet,
    candidate: &SkillSet,
    config: &EngineConfig,
) -> f64 {
    let ratio = required_match_ratio(required, candidate);
    let nice_bonus = config.nice_to_have_step * nice_to_have.overlap(candidate) as f64;
    (ratio + nice_bonus).min(1.0)
}

/// Splits the job's skills against the candidate's.
///
/// Returns `(matched, missing)`. `matched` lists required skills the
/// candidate has, followed by nice-to-have skills the candidate has that are
/// not also required. `missing` lists required skills the candidate lacks.
pub fn partition_skills(job: &JobDescriptor, candidate: &CandidateProfile) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in job.required_skills.iter() {
        if candidate.skills.contains(skill) {
            matched.push(skill.to_string());
        } else {
            missing.push(skill.to_string());
        }
    }

    matched.extend(
        job.nice_to_have_skills
            .iter()
            .filter(|skill| !job.required_skills.contains(skill) && candidate.skills.contains(skill))
            .map(str::to_string),
    );

    (matched, missing)
}
