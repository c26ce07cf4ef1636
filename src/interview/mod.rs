//! Interview question generation.
//!
//! Questions come out in a fixed order: one per required skill (gap or
//! experience probe), then two behavioral questions, then a leadership
//! question for Senior and Lead openings. The list never exceeds the
//! configured maximum (at most [`MAX_QUESTIONS`](crate::config::MAX_QUESTIONS)).
//! When there are too many required skills, the trailing skill questions are
//! dropped so the behavioral and leadership questions always fit.

use tracing::{debug, warn};

use crate::config::{EngineConfig, MAX_QUESTIONS};
use crate::types::{
    CandidateProfile, Difficulty, JobDescriptor, Question, QuestionCategory, QuestionKind,
};

pub struct QuestionGenerator {
    max_questions: usize,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new(&EngineConfig::v0())
    }
}

impl QuestionGenerator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_questions: config.max_questions.min(MAX_QUESTIONS),
        }
    }

    pub fn generate(
        &self,
        job: Option<&JobDescriptor>,
        candidate: Option<&CandidateProfile>,
    ) -> Vec<Question> {
        let (Some(job), Some(candidate)) = (job, candidate) else {
            warn!("interview questions requested without both entities");
            return Vec::new();
        };

        let mut tail: Vec<Question> = behavioral_questions().into();
        if job.level.is_leadership_track() {
            tail.push(leadership_question());
        }

        let skill_slots = self.max_questions.saturating_sub(tail.len());
        let mut questions: Vec<Question> = job
            .required_skills
            .iter()
            .take(skill_slots)
            .map(|skill| skill_question(skill, candidate.skills.contains(skill)))
            .collect();

        questions.extend(tail);
        questions.truncate(self.max_questions);

        debug!(
            job_id = job.id.as_str(),
            candidate_id = candidate.id.as_str(),
            count = questions.len(),
            "generated interview questions"
        );
        questions
    }
}

fn skill_question(skill: &str, candidate_has_skill: bool) -> Question {
    let (question, category) = if candidate_has_skill {
        (
            format!("Can you describe your experience with {skill} and give a specific example?"),
            QuestionCategory::Experience,
        )
    } else {
        (
            format!("How would you approach learning {skill} if this project required it?"),
            QuestionCategory::SkillGap,
        )
    };

    Question {
        kind: QuestionKind::Technical,
        skill: Some(skill.to_string()),
        question,
        difficulty: Difficulty::Medium,
        category,
    }
}

fn behavioral_questions() -> [Question; 2] {
    [
        Question {
            kind: QuestionKind::Behavioral,
            skill: None,
            question: "Tell me about a time you had to learn a new technology quickly. How did you approach it?"
                .to_string(),
            difficulty: Difficulty::Easy,
            category: QuestionCategory::LearningAbility,
        },
        Question {
            kind: QuestionKind::Behavioral,
            skill: None,
            question: "Describe a challenging project you worked on and how you overcame its obstacles."
                .to_string(),
            difficulty: Difficulty::Medium,
            category: QuestionCategory::ProblemSolving,
        },
    ]
}

fn leadership_question() -> Question {
    Question {
        kind: QuestionKind::Leadership,
        skill: None,
        question: "How do you mentor junior developers and make sure knowledge is shared across the team?"
            .to_string(),
        difficulty: Difficulty::Hard,
        category: QuestionCategory::Leadership,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_and_probe_questions_name_the_skill() {
        let gap = skill_question("kafka", false);
        assert_eq!(gap.category, QuestionCategory::SkillGap);
        assert!(gap.question.contains("kafka"));

        let probe = skill_question("rust", true);
        assert_eq!(probe.category, QuestionCategory::Experience);
        assert_eq!(probe.difficulty, Difficulty::Medium);
        assert_eq!(probe.skill.as_deref(), Some("rust"));
    }

    #[test]
    fn behavioral_pair_is_easy_then_medium() {
        let [first, second] = behavioral_questions();
        assert_eq!(first.difficulty, Difficulty::Easy);
        assert_eq!(second.difficulty, Difficulty::Medium);
    }
}
