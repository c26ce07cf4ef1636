pub mod identifiers;
pub mod profiles;
pub mod results;
pub mod skills;

pub use identifiers::{CandidateId, ContentVersion, JobId};
pub use profiles::{CandidateProfile, CandidateStatus, JobDescriptor, JobLevel};
pub use results::{
    Difficulty, MatchResult, Question, QuestionCategory, QuestionKind, ResumeProfile,
    ScoreBreakdown,
};
pub use skills::SkillSet;
