use super::vector::TermVector;

pub trait Similarity {
    fn similarity(&self, a: &TermVector, b: &TermVector) -> f64;

    /// `similarity` forced into [0, 1]; non-finite results collapse to 0.
    fn bounded(&self, a: &TermVector, b: &TermVector) -> f64 {
        let value = self.similarity(a, b);
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Plain term-frequency cosine similarity. No corpus weighting.
#[derive(Debug, Default, Clone, Copy)]
pub struct CosineSimilarity;

impl Similarity for CosineSimilarity {
    fn similarity(&self, a: &TermVector, b: &TermVector) -> f64 {
        let norm_a = a.norm();
        let norm_b = b.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        let score = a.dot(b) / (norm_a * norm_b);
        debug_assert!(
            (0.0..=1.0 + 1e-9).contains(&score),
            "cosine {score} out of range [0.0, 1.0]"
        );
        score
    }
}
