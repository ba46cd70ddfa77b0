//! Game state store.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::domain::entities::{QuestionCatalog, Roster, RosterBounds};
use crate::domain::errors::GameError;
use crate::domain::game::{GameAction, GameState, Page, transition};
use crate::domain::ports::RosterStoragePort;

/// Owns the session state and exposes the only ways to change it.
///
/// Every operation is routed through [`transition`]. Roster changes are
/// written through the storage port on a best-effort basis.
pub struct GameStore {
    state: GameState,
    bounds: RosterBounds,
    catalog: QuestionCatalog,
    storage: Arc<dyn RosterStoragePort>,
    rng: StdRng,
}

impl GameStore {
    /// Creates the store, restoring the saved roster when one is readable.
    ///
    /// Never fails: missing or corrupt data falls back to a blank roster.
    #[must_use]
    pub fn initialize(
        storage: Arc<dyn RosterStoragePort>,
        catalog: QuestionCatalog,
        bounds: RosterBounds,
    ) -> Self {
        let roster = match storage.load_roster() {
            Ok(Some(saved)) => {
                debug!(players = saved.len(), "Restored saved roster");
                saved.fitted(bounds)
            }
            Ok(None) => Roster::default_for(bounds),
            Err(e) => {
                warn!(error = %e, "Could not restore roster, starting blank");
                Roster::default_for(bounds)
            }
        };

        Self {
            state: GameState::new(roster),
            bounds,
            catalog,
            storage,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replaces the random source, for reproducible draws.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Player count bounds.
    #[must_use]
    pub const fn bounds(&self) -> RosterBounds {
        self.bounds
    }

    /// Active page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.state.page()
    }

    /// Whether the roster currently allows starting a game.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.state.page() == Page::Setup && self.state.roster().is_ready(self.bounds)
    }

    /// Renames the player at `index`.
    pub fn set_player(&mut self, index: usize, name: impl Into<String>) {
        self.dispatch(GameAction::SetPlayer {
            index,
            name: name.into(),
        });
    }

    /// Appends a blank player slot. Returns `false` at the maximum.
    pub fn add_player(&mut self) -> bool {
        let before = self.state.roster().len();
        self.dispatch(GameAction::AddPlayer);
        self.state.roster().len() > before
    }

    /// Removes the player slot at `index`. Returns `false` at the minimum.
    pub fn remove_player(&mut self, index: usize) -> bool {
        let before = self.state.roster().len();
        self.dispatch(GameAction::RemovePlayer { index });
        self.state.roster().len() < before
    }

    /// Draws a question pair and an impostor and starts the first turn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotInSetup`] outside the setup page and
    /// [`GameError::RosterNotReady`] when the named player count is out of
    /// bounds. State is unchanged in both cases.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.state.page() != Page::Setup {
            return Err(GameError::NotInSetup);
        }
        let filled = self.state.roster().filled_count();
        if !self.bounds.contains(filled) {
            return Err(GameError::RosterNotReady {
                filled,
                min: self.bounds.min(),
                max: self.bounds.max(),
            });
        }

        let pair_index = self.rng.random_range(0..self.catalog.len());
        let impostor = self.rng.random_range(0..filled);
        let pair = self
            .catalog
            .get(pair_index)
            .cloned()
            .ok_or(GameError::EmptyCatalog)?;

        self.dispatch(GameAction::StartGame { pair, impostor });
        info!(players = filled, "Round started");
        Ok(())
    }

    /// Stores the current player's answer.
    pub fn record_answer(&mut self, text: impl Into<String>) {
        self.dispatch(GameAction::RecordAnswer(text.into()));
    }

    /// Moves to the next player, or to the reveal prompt after the last one.
    pub fn advance_turn(&mut self) {
        self.dispatch(GameAction::AdvanceTurn);
    }

    /// Records the current player's answer and passes the device on.
    pub fn submit_answer(&mut self, text: impl Into<String>) {
        self.record_answer(text);
        self.advance_turn();
    }

    /// Shows everyone's answers.
    pub fn reveal_answers(&mut self) {
        self.dispatch(GameAction::RevealAnswers);
    }

    /// Shows who the impostor was.
    pub fn reveal_impostor(&mut self) {
        self.dispatch(GameAction::RevealImpostor);
    }

    /// Drops the round and returns to setup with the same players.
    pub fn reset_to_setup(&mut self) {
        self.dispatch(GameAction::ResetToSetup);
        info!("Returned to setup");
    }

    fn dispatch(&mut self, action: GameAction) {
        let previous = std::mem::take(&mut self.state);
        let roster_before = previous.roster().clone();
        self.state = transition(previous, action, self.bounds);

        if self.state.roster() != &roster_before {
            self.persist_roster();
        }
    }

    fn persist_roster(&self) {
        if let Err(e) = self.storage.save_roster(self.state.roster()) {
            warn!(error = %e, "Failed to save roster");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::QuestionPair;
    use crate::domain::errors::StorageError;
    use crate::domain::ports::mocks::MockRosterStoragePort;
    use crate::infrastructure::{FileRosterStorage, MemoryRosterStorage};
    use test_case::test_case;

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            QuestionPair::new("Best holiday spot?", "Worst holiday spot?"),
            QuestionPair::new("Ideal pet?", "Scariest animal?"),
        ])
        .unwrap()
    }

    fn store_with(storage: Arc<dyn RosterStoragePort>) -> GameStore {
        GameStore::initialize(storage, catalog(), RosterBounds::STANDARD)
            .with_rng(StdRng::seed_from_u64(7))
    }

    fn named_store(names: Vec<&str>) -> (GameStore, Arc<MemoryRosterStorage>) {
        let storage = Arc::new(MemoryRosterStorage::with_roster(Roster::from(names)));
        (store_with(storage.clone()), storage)
    }

    #[test]
    fn test_initialize_restores_saved_roster() {
        let (store, _) = named_store(vec!["Amy", "Bo", "Cid", "Dee"]);
        assert_eq!(store.state().roster().names(), ["Amy", "Bo", "Cid", "Dee"]);
        assert_eq!(store.page(), Page::Setup);
    }

    #[test]
    fn test_initialize_defaults_without_saved_roster() {
        let store = store_with(Arc::new(MemoryRosterStorage::new()));
        assert_eq!(store.state().roster().names(), ["", "", ""]);
    }

    #[test]
    fn test_initialize_survives_corrupt_storage() {
        let mut storage = MockRosterStoragePort::new();
        storage
            .expect_load_roster()
            .returning(|| Err(StorageError::Corrupt("expected a list".into())));

        let store = store_with(Arc::new(storage));
        assert_eq!(store.state().roster().names(), ["", "", ""]);
    }

    #[test]
    fn test_initialize_over_malformed_roster_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(&path, "[1,2,").unwrap();

        let store = store_with(Arc::new(FileRosterStorage::new(path.clone())));
        assert_eq!(store.state().roster().names(), ["", "", ""]);
        assert_eq!(store.page(), Page::Setup);
    }

    #[test]
    fn test_roster_edits_are_persisted() {
        let (mut store, storage) = named_store(vec!["", "", ""]);
        store.set_player(0, "Amy");
        assert!(store.add_player());

        let saved = storage.snapshot().unwrap();
        assert_eq!(saved.names(), ["Amy", "", "", ""]);

        assert!(store.remove_player(3));
        assert_eq!(storage.snapshot().unwrap().len(), 3);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let mut storage = MockRosterStoragePort::new();
        storage.expect_load_roster().returning(|| Ok(None));
        storage
            .expect_save_roster()
            .times(1)
            .returning(|_| Err(StorageError::WriteFailed("disk full".into())));

        let mut store = store_with(Arc::new(storage));
        store.set_player(1, "Bo");
        assert_eq!(store.state().roster().name(1), Some("Bo"));
    }

    #[test]
    fn test_unchanged_roster_is_not_rewritten() {
        let mut storage = MockRosterStoragePort::new();
        storage
            .expect_load_roster()
            .returning(|| Ok(Some(Roster::blank(10))));
        storage.expect_save_roster().never();

        let mut store = store_with(Arc::new(storage));
        assert!(!store.add_player());
    }

    #[test]
    fn test_add_and_remove_respect_bounds() {
        let (mut store, _) = named_store(vec!["Amy", "Bo", "Cid"]);
        assert!(!store.remove_player(0));
        assert_eq!(store.state().roster().len(), 3);

        for _ in 0..7 {
            assert!(store.add_player());
        }
        assert!(!store.add_player());
        assert_eq!(store.state().roster().len(), 10);
    }

    #[test]
    fn test_start_refused_with_too_few_names() {
        let (mut store, _) = named_store(vec!["Amy", "Bo", ""]);
        assert!(!store.can_start());
        assert_eq!(
            store.start_game(),
            Err(GameError::RosterNotReady {
                filled: 2,
                min: 3,
                max: 10
            })
        );
        assert_eq!(store.page(), Page::Setup);
    }

    #[test]
    fn test_start_refused_mid_round() {
        let (mut store, _) = named_store(vec!["Amy", "Bo", "Cid"]);
        store.start_game().unwrap();
        assert_eq!(store.start_game(), Err(GameError::NotInSetup));
    }

    #[test_case(3)]
    #[test_case(5)]
    #[test_case(10)]
    fn test_impostor_is_always_on_the_roster(count: usize) {
        let names: Vec<String> = (0..count).map(|i| format!("P{i}")).collect();
        let storage = Arc::new(MemoryRosterStorage::with_roster(Roster::new(names)));
        let mut store = store_with(storage);

        for _ in 0..20 {
            store.start_game().unwrap();
            let state = store.state();
            let impostor = state.impostor_index().unwrap();
            assert!(impostor < count);

            let pair = state.question_pair().unwrap().clone();
            for i in 0..count {
                let expected = if i == impostor {
                    &pair.impostor_question
                } else {
                    &pair.question
                };
                assert_eq!(state.question_for(i), Some(expected.as_str()));
            }
            store.reset_to_setup();
        }
    }

    #[test]
    fn test_reset_from_setup_is_harmless() {
        let (mut store, _) = named_store(vec!["Amy", "Bo", "Cid"]);
        store.reset_to_setup();
        assert_eq!(store.state().roster().names(), ["Amy", "Bo", "Cid"]);
        assert!(store.state().round().is_none());
    }

    #[test]
    fn test_full_round_scenario() {
        let (mut store, storage) = named_store(vec!["Amy", "Bo", "Cid"]);
        store.start_game().unwrap();

        for answer in ["a1", "a2", "a3"] {
            assert_eq!(store.page(), Page::Cards);
            store.submit_answer(answer);
        }
        assert_eq!(store.page(), Page::RevealPrompt);
        assert_eq!(store.state().answers(), ["a1", "a2", "a3"]);

        store.reveal_answers();
        assert_eq!(store.page(), Page::Discussion);
        let sheet: Vec<_> = store.state().answer_sheet().collect();
        assert_eq!(sheet, [("Amy", "a1"), ("Bo", "a2"), ("Cid", "a3")]);

        store.reveal_impostor();
        assert_eq!(store.page(), Page::Reveal);
        let state = store.state();
        let impostor = state.impostor_index().unwrap();
        assert_eq!(state.impostor_name(), Some(["Amy", "Bo", "Cid"][impostor]));
        assert_eq!(state.impostor_answer(), Some(["a1", "a2", "a3"][impostor]));
        assert_eq!(
            state.question_for(impostor),
            Some(state.question_pair().unwrap().impostor_question.as_str())
        );

        store.reset_to_setup();
        assert_eq!(store.page(), Page::Setup);
        assert_eq!(store.state().roster().names(), ["Amy", "Bo", "Cid"]);
        assert!(store.state().answers().is_empty());
        assert_eq!(storage.snapshot().unwrap().names(), ["Amy", "Bo", "Cid"]);
    }
}
