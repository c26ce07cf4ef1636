use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::vocabulary::{KNOWN_SKILLS, LOCALES};
use crate::config::EngineConfig;
use crate::text::tokenize;
use crate::types::{ResumeProfile, SkillSet};

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    LOCALES
        .iter()
        .flat_map(|locale| locale.stopwords.iter().copied())
        .collect()
});

static KNOWN_SKILL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| KNOWN_SKILLS.iter().copied().collect());

// `<number> <year word> [connector] <experience word>`, any locale's words in any slot.
static EXPERIENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&experience_pattern()).expect("experience pattern built from literal word lists")
});

fn alternation<'a>(terms: impl Iterator<Item = &'a &'static str>) -> String {
    terms
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|")
}

fn experience_pattern() -> String {
    let years = alternation(LOCALES.iter().flat_map(|l| l.year_terms.iter()));
    let experience = alternation(LOCALES.iter().flat_map(|l| l.experience_terms.iter()));
    let connectors = alternation(LOCALES.iter().flat_map(|l| l.connectors.iter()));

    let connector = if connectors.is_empty() {
        String::new()
    } else {
        format!(r"(?:(?:{connectors})\s*)?")
    };

    format!(r"(?i)(\d+)\s*(?:{years})\s*{connector}(?:{experience})")
}

/// Extracts skills, experience and education from raw resume text.
///
/// Total: every input, including empty or garbage text, produces a profile.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    term_limit: usize,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new(&EngineConfig::v0())
    }
}

impl ResumeParser {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            term_limit: config.processed_term_limit,
        }
    }

    pub fn parse(&self, raw_text: &str) -> ResumeProfile {
        if raw_text.trim().is_empty() {
            warn!("empty resume text; returning default profile");
            return ResumeProfile::empty(raw_text);
        }

        // 1-3. Lower-case, tokenize, drop stopwords, keep long alphabetic terms
        let lowered = raw_text.to_lowercase();
        let terms: Vec<String> = tokenize(&lowered)
            .into_iter()
            .filter(|token| is_meaningful(token))
            .collect();

        // 4. Skills
        let skills: SkillSet = terms
            .iter()
            .filter(|term| KNOWN_SKILL_SET.contains(term.as_str()))
            .collect();

        // 5-6. Experience and education
        let experience_years = extract_experience_years(raw_text);
        let education = extract_education(&lowered);

        debug!(
            terms = terms.len(),
            skills = skills.len(),
            experience_years,
            education = education.len(),
            "parsed resume"
        );

        // 7. Bound the term list
        let processed_terms = terms.into_iter().take(self.term_limit).collect();

        ResumeProfile {
            skills,
            experience_years,
            education,
            processed_terms,
            raw_text: raw_text.to_string(),
        }
    }
}

fn is_meaningful(token: &str) -> bool {
    !STOPWORDS.contains(token)
        && token.chars().count() > 2
        && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// First stated years of experience, or 0.
pub fn extract_experience_years(text: &str) -> u32 {
    EXPERIENCE_PATTERN
        .captures_iter(text)
        .find_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Education keywords present in already lower-cased text.
pub fn extract_education(lowered: &str) -> BTreeSet<String> {
    LOCALES
        .iter()
        .flat_map(|locale| locale.education_keywords.iter())
        .filter(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
