//! Fixed word lists used by resume extraction.
//!
//! Locale-specific rules are kept as one [`LocaleRules`] entry per language so
//! that adding a language means adding a table, not editing a regex.

/// Extraction rules for one language.
#[derive(Debug)]
pub struct LocaleRules {
    pub name: &'static str,
    /// Words for "year(s)" that may follow the leading number.
    pub year_terms: &'static [&'static str],
    /// Optional connector between the year word and the experience word.
    pub connectors: &'static [&'static str],
    /// Words for "experience".
    pub experience_terms: &'static [&'static str],
    /// Education keywords, matched as case-insensitive substrings.
    pub education_keywords: &'static [&'static str],
    pub stopwords: &'static [&'static str],
}

pub const ENGLISH: LocaleRules = LocaleRules {
    name: "en",
    year_terms: &["years", "year"],
    connectors: &["of"],
    experience_terms: &["experience"],
    education_keywords: &["bachelor", "master", "phd", "university", "college"],
    stopwords: &[
        "about", "above", "after", "again", "all", "also", "am", "an", "and", "another", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
        "but", "by", "came", "can", "cannot", "come", "could", "did", "do", "does", "doing",
        "during", "each", "few", "for", "from", "further", "get", "got", "has", "had", "he",
        "have", "her", "here", "him", "himself", "his", "how", "if", "in", "into", "is", "it",
        "its", "itself", "like", "make", "many", "me", "might", "more", "most", "much", "must",
        "my", "myself", "never", "now", "of", "on", "only", "or", "other", "our", "ours",
        "ourselves", "out", "over", "own", "said", "same", "see", "should", "since", "so", "some",
        "still", "such", "take", "than", "that", "the", "their", "theirs", "them", "themselves",
        "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
        "until", "up", "very", "was", "way", "we", "well", "were", "what", "where", "when",
        "which", "while", "who", "whom", "with", "would", "why", "you", "your", "yours",
        "yourself",
    ],
};

pub const VIETNAMESE: LocaleRules = LocaleRules {
    name: "vi",
    year_terms: &["năm"],
    connectors: &[],
    experience_terms: &["kinh nghiệm"],
    education_keywords: &["đại học", "thạc sĩ"],
    stopwords: &[
        "và", "của", "là", "các", "có", "trong", "được", "cho", "với", "một", "những", "này",
    ],
};

/// Every supported locale, in matching order.
pub const LOCALES: &[&LocaleRules] = &[&ENGLISH, &VIETNAMESE];

/// Skills recognised in free-text resumes. Lower-case, single tokens.
pub const KNOWN_SKILLS: &[&str] = &[
    "javascript", "python", "java", "react", "node", "vue", "angular", "typescript", "html", "css",
    "sql", "mongodb", "postgresql", "aws", "docker", "kubernetes", "git", "linux", "api", "rest",
    "graphql", "redis", "elasticsearch", "machine", "learning",
];
