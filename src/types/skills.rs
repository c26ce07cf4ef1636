use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordered, de-duplicated set of skills.
///
/// Every skill is trimmed and lower-cased on insertion, so `"React "` and
/// `"react"` are the same skill. Blank entries are dropped. Iteration order is
/// lexicographic, which keeps composed text and skill lists deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    inner: BTreeSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        SkillSet {
            inner: BTreeSet::new(),
        }
    }

    /// Inserts a skill, returning `false` if it was blank or already present.
    pub fn insert(&mut self, skill: impl AsRef<str>) -> bool {
        let normalized = normalize_skill(skill.as_ref());
        if normalized.is_empty() {
            return false;
        }
        self.inner.insert(normalized)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.inner.contains(&normalize_skill(skill))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }

    /// Number of skills in `self` that are also present in `other`.
    pub fn overlap(&self, other: &SkillSet) -> usize {
        self.inner.intersection(&other.inner).count()
    }

    /// Union of both sets as a new set.
    pub fn union(&self, other: &SkillSet) -> SkillSet {
        SkillSet {
            inner: self.inner.union(&other.inner).cloned().collect(),
        }
    }

    /// Space-joined skills, in set order.
    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}

fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(skills: Vec<String>) -> Self {
        skills.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.inner.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_normalizes_case_and_whitespace() {
        let set: SkillSet = ["React", " react ", "TypeScript", "  "].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("REACT"));
        assert_eq!(set.joined(), "react typescript");
    }

    #[test]
    fn overlap_counts_shared_skills() {
        let a: SkillSet = ["rust", "sql", "docker"].into_iter().collect();
        let b: SkillSet = ["sql", "Docker", "go"].into_iter().collect();
        assert_eq!(a.overlap(&b), 2);
        assert_eq!(a.union(&b).len(), 4);
    }
}
