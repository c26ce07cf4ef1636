use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::identifiers::{CandidateId, JobId};
use super::results::ResumeProfile;
use super::skills::SkillSet;

/// Seniority of a job opening.
///
/// Parsed case-insensitively; unknown labels are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobLevel {
    Intern,
    Junior,
    Middle,
    Senior,
    Lead,
    #[default]
    Unspecified,
    Other(String),
}

impl JobLevel {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "" => JobLevel::Unspecified,
            "intern" => JobLevel::Intern,
            "junior" => JobLevel::Junior,
            "middle" | "mid" => JobLevel::Middle,
            "senior" => JobLevel::Senior,
            "lead" => JobLevel::Lead,
            _ => JobLevel::Other(label.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobLevel::Intern => "Intern",
            JobLevel::Junior => "Junior",
            JobLevel::Middle => "Middle",
            JobLevel::Senior => "Senior",
            JobLevel::Lead => "Lead",
            JobLevel::Unspecified => "",
            JobLevel::Other(label) => label,
        }
    }

    /// Senior and Lead openings get a leadership interview question.
    pub fn is_leadership_track(&self) -> bool {
        matches!(self, JobLevel::Senior | JobLevel::Lead)
    }
}

impl From<String> for JobLevel {
    fn from(label: String) -> Self {
        JobLevel::parse(&label)
    }
}

impl From<JobLevel> for String {
    fn from(level: JobLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Recruiting pipeline stage of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    Sourcing,
    Screening,
    Interviewing,
    Offer,
    Hired,
    Rejected,
}

/// A job opening as handed to the engine by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDescriptor {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub department: String,
    pub level: JobLevel,
    pub required_skills: SkillSet,
    pub nice_to_have_skills: SkillSet,
}

/// A candidate as handed to the engine by the caller.
///
/// `status` and `last_interaction` are engagement signals; they only feed
/// advisory recommendations and never the score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub id: CandidateId,
    pub headline: String,
    pub skills: SkillSet,
    pub experience_years: u32,
    pub resume_highlights: Vec<String>,
    pub desired_role: String,
    pub status: Option<CandidateStatus>,
    pub last_interaction: Option<NaiveDate>,
}

impl CandidateProfile {
    /// Folds a parsed resume into a new profile.
    ///
    /// Skills become the union of both sets and experience the larger of the
    /// two figures. All other fields are carried over unchanged.
    pub fn merge_resume(&self, resume: &ResumeProfile) -> CandidateProfile {
        CandidateProfile {
            id: self.id.clone(),
            headline: self.headline.clone(),
            skills: self.skills.union(&resume.skills),
            experience_years: self.experience_years.max(resume.experience_years),
            resume_highlights: self.resume_highlights.clone(),
            desired_role: self.desired_role.clone(),
            status: self.status,
            last_interaction: self.last_interaction,
        }
    }
}
