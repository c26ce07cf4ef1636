use crate::types::{CandidateProfile, CandidateStatus};

pub(crate) const NOT_FOUND_NOTE: &str = "No matching job or candidate was found.";

/// Advisory next steps for a match. Never influences the score.
///
/// Order: training for missing skills, pipeline nudge for any known status
/// other than interviewing, follow-up on the last recorded interaction.
pub fn build_recommendations(candidate: &CandidateProfile, missing_skills: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing_skills.is_empty() {
        recommendations.push(format!(
            "Suggest fast-track training in {} to meet the role requirements.",
            missing_skills.join(", ")
        ));
    }

    if candidate
        .status
        .is_some_and(|status| status != CandidateStatus::Interviewing)
    {
        recommendations
            .push("Move the candidate to the technical interview round within 48 hours.".to_string());
    }

    if let Some(date) = candidate.last_interaction {
        recommendations.push(format!(
            "Send a pipeline update within 24 hours of the last interaction on {date}."
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn missing_skills_produce_training_hint() {
        let recs = build_recommendations(
            &CandidateProfile::default(),
            &["kafka".to_string(), "rust".to_string()],
        );
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("kafka, rust"));
    }

    #[test]
    fn screening_candidate_gets_interview_nudge() {
        let candidate = CandidateProfile {
            status: Some(CandidateStatus::Screening),
            ..Default::default()
        };
        let recs = build_recommendations(&candidate, &[]);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("48 hours"));
    }

    #[test]
    fn interviewing_candidate_gets_no_nudge() {
        let candidate = CandidateProfile {
            status: Some(CandidateStatus::Interviewing),
            ..Default::default()
        };
        assert!(build_recommendations(&candidate, &[]).is_empty());
    }

    #[test]
    fn every_status_but_interviewing_gets_nudge() {
        for status in [
            CandidateStatus::Sourcing,
            CandidateStatus::Screening,
            CandidateStatus::Offer,
            CandidateStatus::Hired,
            CandidateStatus::Rejected,
        ] {
            let candidate = CandidateProfile {
                status: Some(status),
                ..Default::default()
            };
            let recs = build_recommendations(&candidate, &[]);
            assert_eq!(recs.len(), 1, "{status:?}");
            assert!(recs[0].contains("48 hours"), "{status:?}");
        }
    }

    #[test]
    fn unknown_status_gets_no_nudge() {
        assert!(build_recommendations(&CandidateProfile::default(), &[]).is_empty());
    }

    #[test]
    fn last_interaction_date_is_quoted() {
        let candidate = CandidateProfile {
            last_interaction: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        let recs = build_recommendations(&candidate, &[]);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("2024-03-01"));
    }
}
