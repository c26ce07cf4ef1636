use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use match_core::scoring::MatchEngine;
use match_core::types::{CandidateProfile, CandidateStatus, JobDescriptor, JobLevel};
use match_core::{compute_match, generate_interview_questions, parse_resume};

fn make_job() -> JobDescriptor {
    JobDescriptor {
        id: "JOB-9002".into(),
        title: "Senior Software Engineer".to_string(),
        description: "Build scalable web applications using modern technologies".to_string(),
        department: "Engineering".to_string(),
        level: JobLevel::Senior,
        required_skills: ["javascript", "react", "node", "sql"].into_iter().collect(),
        nice_to_have_skills: ["typescript", "aws", "docker"].into_iter().collect(),
    }
}

fn make_candidate() -> CandidateProfile {
    CandidateProfile {
        id: "CAN-102".into(),
        headline: "Full-stack Developer with 5 years experience".to_string(),
        skills: ["javascript", "react", "node", "python"].into_iter().collect(),
        experience_years: 5,
        resume_highlights: vec![
            "Built scalable applications".to_string(),
            "Led team of 3 developers".to_string(),
        ],
        desired_role: "Senior Software Engineer".to_string(),
        status: Some(CandidateStatus::Screening),
        last_interaction: NaiveDate::from_ymd_opt(2024, 2, 27),
    }
}

#[test]
fn determinism_repeated_match_is_identical() {
    let job = make_job();
    let candidate = make_candidate();

    let first = compute_match(Some(&job), Some(&candidate));
    for _ in 0..10 {
        let again = compute_match(Some(&job), Some(&candidate));
        assert_eq!(first, again);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&again).unwrap(),
            "serialized results must be byte-identical"
        );
    }
}

#[test]
fn determinism_inputs_are_not_mutated() {
    let job = make_job();
    let candidate = make_candidate();
    let job_before = job.clone();
    let candidate_before = candidate.clone();

    let _ = compute_match(Some(&job), Some(&candidate));
    let _ = generate_interview_questions(Some(&job), Some(&candidate));

    assert_eq!(job, job_before);
    assert_eq!(candidate, candidate_before);
}

#[test]
fn determinism_skill_insertion_order_is_irrelevant() {
    let job = make_job();
    let candidate = make_candidate();

    let mut reordered = candidate.clone();
    reordered.skills = ["python", "node", "react", "javascript"].into_iter().collect();

    assert_eq!(
        compute_match(Some(&job), Some(&candidate)),
        compute_match(Some(&job), Some(&reordered))
    );
}

#[test]
fn determinism_parallel_matching_agrees_with_sequential() {
    let engine = Arc::new(MatchEngine::default());
    let job = Arc::new(make_job());
    let candidate = Arc::new(make_candidate());

    let expected = engine.compute(Some(&*job), Some(&*candidate));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let job = Arc::clone(&job);
            let candidate = Arc::clone(&candidate);
            thread::spawn(move || engine.compute(Some(&*job), Some(&*candidate)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn determinism_questions_and_resume_are_repeatable() {
    let job = make_job();
    let candidate = make_candidate();
    let text = "Bachelor in CS. 4 years of experience with Python, Docker and AWS.";

    assert_eq!(
        generate_interview_questions(Some(&job), Some(&candidate)),
        generate_interview_questions(Some(&job), Some(&candidate))
    );
    assert_eq!(parse_resume(text), parse_resume(text));
}

#[test]
fn determinism_reference_pair_snapshot() {
    let result = compute_match(Some(&make_job()), Some(&make_candidate()));

    assert_eq!(result.job_id.as_str(), "JOB-9002");
    assert_eq!(result.candidate_id.as_str(), "CAN-102");
    assert_eq!(result.matched_skills, vec!["javascript", "node", "react"]);
    assert_eq!(result.missing_skills, vec!["sql"]);
    assert_eq!(result.breakdown.required_match_ratio, 0.75);
    // 0.4187 * 70 + 0.75 * 30 = 51.81
    assert_eq!(result.score, 52);
    assert_eq!(
        result.recommendations,
        vec![
            "Suggest fast-track training in sql to meet the role requirements.".to_string(),
            "Move the candidate to the technical interview round within 48 hours.".to_string(),
            "Send a pipeline update within 24 hours of the last interaction on 2024-02-27."
                .to_string(),
        ]
    );
}

#[test]
fn determinism_holds_with_a_subscriber_installed() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("match_core=trace"))
        .with_test_writer()
        .try_init();

    let job = make_job();
    let candidate = make_candidate();

    let first = compute_match(Some(&job), Some(&candidate));
    let neutral = compute_match(Some(&job), None);
    let empty = parse_resume("");

    assert_eq!(first, compute_match(Some(&job), Some(&candidate)));
    assert_eq!(neutral.score, 0);
    assert!(empty.processed_terms.is_empty());
}
