use crate::types::{CandidateProfile, JobDescriptor};

/// Composes the searchable text of a job.
///
/// Field order is fixed: title, description, required skills, nice-to-have
/// skills, department, level. Empty fields still contribute an (empty)
/// segment, so the layout never shifts.
pub fn compose_job_text(job: &JobDescriptor) -> String {
    let required = job.required_skills.joined();
    let nice_to_have = job.nice_to_have_skills.joined();

    [
        job.title.as_str(),
        job.description.as_str(),
        required.as_str(),
        nice_to_have.as_str(),
        job.department.as_str(),
        job.level.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Composes the searchable text of a candidate.
///
/// Field order is fixed: headline, skills, resume highlights, desired role.
pub fn compose_candidate_text(candidate: &CandidateProfile) -> String {
    let skills = candidate.skills.joined();
    let highlights = candidate.resume_highlights.join(" ");

    [
        candidate.headline.as_str(),
        skills.as_str(),
        highlights.as_str(),
        candidate.desired_role.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}
