//! Question catalog sources.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::entities::{QuestionCatalog, QuestionPair};
use crate::domain::errors::GameError;

const BUILTIN_PAIRS: &[(&str, &str)] = &[
    (
        "What is your favourite food?",
        "What food would you never eat?",
    ),
    (
        "Where would you go on your dream holiday?",
        "Where would you never want to travel?",
    ),
    (
        "What animal would make the best pet?",
        "What animal scares you the most?",
    ),
    (
        "What is the best movie you have ever seen?",
        "What movie put you to sleep?",
    ),
    (
        "How many hours of sleep do you need?",
        "How many cups of coffee do you drink a day?",
    ),
    (
        "What would you buy with a million dollars?",
        "What is the most useless thing you own?",
    ),
    (
        "What superpower would you pick?",
        "What everyday chore would you hand to a robot?",
    ),
    (
        "What is the best age to be?",
        "At what age did you learn to ride a bike?",
    ),
    (
        "Which celebrity would you like to have dinner with?",
        "Which celebrity annoys you the most?",
    ),
    (
        "What is your favourite season?",
        "What season is the worst for allergies?",
    ),
    (
        "What song always gets you dancing?",
        "What song gets stuck in your head for days?",
    ),
    (
        "What is the perfect pizza topping?",
        "What topping should be banned from pizza?",
    ),
    (
        "How many people were at your last birthday party?",
        "How many unread emails do you have?",
    ),
    (
        "What hobby would you pick up if you had more time?",
        "What hobby did you give up on?",
    ),
    (
        "What is the best thing to do on a rainy day?",
        "What is the worst thing to do on a first date?",
    ),
    (
        "Which historical era would you visit?",
        "Which decade had the worst fashion?",
    ),
    (
        "What is your go-to karaoke song?",
        "What song would you never sing in public?",
    ),
    (
        "What would you name a boat?",
        "What would you name a goldfish?",
    ),
    (
        "What is the best board game?",
        "What game makes you lose friends?",
    ),
    (
        "How much would you pay for a great concert ticket?",
        "How much did your first phone cost?",
    ),
    (
        "What is the most useful kitchen tool?",
        "What gadget gathers dust in your cupboard?",
    ),
    (
        "What is the best breakfast?",
        "What do you eat at midnight?",
    ),
    (
        "What job would you do for free?",
        "What job would you never do for any money?",
    ),
    (
        "Where is the best place to read a book?",
        "Where is the worst place to fall asleep?",
    ),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] GameError),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    pairs: Vec<QuestionPair>,
}

/// The catalog shipped with the game.
///
/// # Panics
///
/// Panics if the built-in list is empty.
#[must_use]
pub fn builtin_catalog() -> QuestionCatalog {
    let pairs = BUILTIN_PAIRS
        .iter()
        .map(|(question, impostor)| QuestionPair::new(*question, *impostor))
        .collect();
    QuestionCatalog::new(pairs).expect("built-in catalog is empty")
}

/// Parses a catalog from TOML `[[pairs]]` tables.
///
/// # Errors
///
/// Returns `CatalogError` for malformed TOML or a file without pairs.
pub fn parse_catalog(content: &str) -> Result<QuestionCatalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content)?;
    let pairs = file
        .pairs
        .into_iter()
        .filter(|p| !p.question.trim().is_empty() && !p.impostor_question.trim().is_empty())
        .collect();
    Ok(QuestionCatalog::new(pairs)?)
}

/// Loads a catalog file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<QuestionCatalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Loads the custom catalog when configured, falling back to the built-in one.
#[must_use]
pub fn resolve_catalog(path: Option<&Path>) -> QuestionCatalog {
    let Some(path) = path else {
        return builtin_catalog();
    };

    match load_catalog(path) {
        Ok(catalog) => {
            info!(path = %path.display(), pairs = catalog.len(), "Loaded question catalog");
            catalog
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Using built-in questions");
            builtin_catalog()
        }
    }
}
