pub mod compose;
pub mod tokenize;

pub use compose::{compose_candidate_text, compose_job_text};
pub use tokenize::tokenize;
