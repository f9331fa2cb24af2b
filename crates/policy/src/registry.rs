//! Category registry — the fixed catalogue of guidance types and their
//! categories.
//!
//! Validation is a pure set-membership check: no fuzzy matching, no case
//! folding, no normalization. Absence is represented as `None`/`false`,
//! pushing the "what to do when invalid" decision to the caller.

use crate::catalog;

/// Top-level domain partitioning categories. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuidanceType {
    Mental,
    Technical,
}

impl GuidanceType {
    /// Parse the wire string. Case-sensitive, exact match only.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mental" => Some(Self::Mental),
            "technical" => Some(Self::Technical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mental => "mental",
            Self::Technical => "technical",
        }
    }
}

impl std::fmt::Display for GuidanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All category identifiers for a guidance type, or `None` for an unknown
/// type string.
pub fn categories_for(type_str: &str) -> Option<Vec<&'static str>> {
    let guidance = GuidanceType::parse(type_str)?;
    Some(catalog::entries(guidance).iter().map(|e| e.id).collect())
}

/// Whether `(type, category)` names a registered pair. Never errors.
pub fn is_valid(type_str: &str, category: &str) -> bool {
    match GuidanceType::parse(type_str) {
        Some(guidance) => catalog::entries(guidance).iter().any(|e| e.id == category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types_only() {
        assert_eq!(GuidanceType::parse("mental"), Some(GuidanceType::Mental));
        assert_eq!(
            GuidanceType::parse("technical"),
            Some(GuidanceType::Technical)
        );
        assert_eq!(GuidanceType::parse("Mental"), None);
        assert_eq!(GuidanceType::parse(""), None);
        assert_eq!(GuidanceType::parse("financial"), None);
    }

    #[test]
    fn registry_sizes() {
        assert_eq!(categories_for("mental").unwrap().len(), 9);
        assert_eq!(categories_for("technical").unwrap().len(), 32);
        assert!(categories_for("unknown").is_none());
    }

    #[test]
    fn membership_is_exact() {
        assert!(is_valid("mental", "anxiety"));
        assert!(is_valid("mental", "time management"));
        assert!(is_valid("technical", "frontend"));
        assert!(is_valid("technical", "programming_languages"));

        // No case folding, no cross-type membership, no fuzz.
        assert!(!is_valid("mental", "Anxiety"));
        assert!(!is_valid("mental", "frontend"));
        assert!(!is_valid("technical", "anxiety"));
        assert!(!is_valid("technical", "front-end"));
        assert!(!is_valid("", "anxiety"));
        assert!(!is_valid("mental", ""));
    }

    #[test]
    fn every_category_belongs_to_exactly_one_type() {
        let mental = categories_for("mental").unwrap();
        let technical = categories_for("technical").unwrap();
        for id in &mental {
            assert!(!technical.contains(id), "{id} registered in both types");
        }
    }

    #[test]
    fn category_ids_are_unique_within_a_type() {
        for type_str in ["mental", "technical"] {
            let mut ids = categories_for(type_str).unwrap();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), before, "duplicate id in {type_str}");
        }
    }
}
