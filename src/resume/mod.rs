pub mod parser;
pub mod vocabulary;

pub use parser::{extract_education, extract_experience_years, ResumeParser};
pub use vocabulary::{LocaleRules, KNOWN_SKILLS, LOCALES};
