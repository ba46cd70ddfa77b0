//! Question pairs and the catalog they are drawn from.

use serde::{Deserialize, Serialize};

use crate::domain::errors::GameError;

/// The part a player plays in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Receives the standard question.
    Crew,
    /// Receives the variant question.
    Impostor,
}

/// A standard question matched with its impostor variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPair {
    /// Question shown to everyone except the impostor.
    pub question: String,
    /// Variant shown only to the impostor.
    #[serde(alias = "questionImposter")]
    pub impostor_question: String,
}

impl QuestionPair {
    /// Creates a question pair.
    #[must_use]
    pub fn new(question: impl Into<String>, impostor_question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            impostor_question: impostor_question.into(),
        }
    }

    /// Returns the question a player with `role` receives.
    #[must_use]
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Crew => &self.question,
            Role::Impostor => &self.impostor_question,
        }
    }
}

/// Read-only, non-empty list of question pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    pairs: Vec<QuestionPair>,
}

impl QuestionCatalog {
    /// Creates a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyCatalog`] when `pairs` is empty.
    pub fn new(pairs: Vec<QuestionPair>) -> Result<Self, GameError> {
        if pairs.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self { pairs })
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the pair at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QuestionPair> {
        self.pairs.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_role() {
        let pair = QuestionPair::new("Favourite fruit?", "Least favourite fruit?");
        assert_eq!(pair.for_role(Role::Crew), "Favourite fruit?");
        assert_eq!(pair.for_role(Role::Impostor), "Least favourite fruit?");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            QuestionCatalog::new(Vec::new()),
            Err(GameError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_accepts_legacy_field_name() {
        let pair: QuestionPair =
            serde_json::from_str(r#"{"question":"A?","questionImposter":"B?"}"#).unwrap();
        assert_eq!(pair.impostor_question, "B?");
    }
}
