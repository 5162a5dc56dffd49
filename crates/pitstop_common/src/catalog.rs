//! Canonical question catalog for the posture checklist.
//!
//! The catalog is ordered: enumeration order drives both form rendering
//! and the order of failure records in an assessment result. Question
//! texts double as identifiers, so they must be unique.

use crate::error::PostureError;
use std::collections::HashSet;

/// The standard checklist questions, in display order.
pub fn standard_questions() -> Vec<&'static str> {
    vec![
        "Do you keep diagnostic tools and shop management software updated with the latest security patches?",
        "Do you require strong, unique passwords for every system and account in your shop?",
        "Do you use multi-factor authentication for email, banking, and remote access accounts?",
        "Is customer and vehicle data encrypted both in storage and during transmission?",
        "Do you back up business-critical data regularly and test that backups can be restored?",
        "Is your shop Wi-Fi segmented so that customer and guest devices cannot reach business systems?",
        "Do you train employees to recognize phishing emails and social engineering attempts?",
        "Do you review the security practices of the vendors and software providers you rely on?",
        "Do you have a written incident response plan for handling a cyber attack or data breach?",
        "Do you restrict who can connect to vehicle diagnostic ports and telematics interfaces?",
    ]
}

/// Ordered, immutable list of assessment questions.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<String>,
}

impl Catalog {
    /// Build a catalog from deployment-supplied questions.
    ///
    /// Rejects duplicate question texts: the text is the identifier the
    /// guidance table and answer sets are keyed by.
    pub fn new(questions: Vec<String>) -> Result<Self, PostureError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.as_str()) {
                return Err(PostureError::DuplicateQuestion(question.clone()));
            }
        }
        Ok(Self { questions })
    }

    /// The built-in checklist.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions().into_iter().map(String::from).collect(),
        }
    }

    /// Questions in display order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_has_ten_unique_questions() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 10);

        let unique: HashSet<&str> = catalog.questions().iter().map(String::as_str).collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let questions = vec![
            "Third first".to_string(),
            "Alpha second".to_string(),
            "Zulu third".to_string(),
        ];
        let catalog = Catalog::new(questions.clone()).unwrap();
        assert_eq!(catalog.questions(), questions.as_slice());
    }

    #[test]
    fn test_duplicate_question_rejected() {
        let result = Catalog::new(vec![
            "Do you patch?".to_string(),
            "Do you patch?".to_string(),
        ]);
        assert!(matches!(
            result,
            Err(PostureError::DuplicateQuestion(q)) if q == "Do you patch?"
        ));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
