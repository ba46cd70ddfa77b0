//! Pure state transitions.

use tracing::debug;

use super::{GameState, Page, Round};
use crate::domain::entities::{QuestionPair, RosterBounds};

/// Everything that can change a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    /// Rename the roster slot at `index`.
    SetPlayer { index: usize, name: String },
    /// Append a blank roster slot.
    AddPlayer,
    /// Remove the roster slot at `index`.
    RemovePlayer { index: usize },
    /// Begin a round with an already drawn question pair and impostor.
    StartGame { pair: QuestionPair, impostor: usize },
    /// Store the current player's answer.
    RecordAnswer(String),
    /// Hand the device to the next player, or finish the cards.
    AdvanceTurn,
    /// Leave the reveal prompt for the discussion.
    RevealAnswers,
    /// Leave the discussion for the impostor reveal.
    RevealImpostor,
    /// Discard the round and return to setup, keeping the roster.
    ResetToSetup,
}

/// Applies `action` to `state`.
///
/// Actions that make no sense on the current page leave the state unchanged.
/// `StartGame` compacts the roster first, so `impostor` indexes the compacted
/// roster.
#[must_use]
pub fn transition(mut state: GameState, action: GameAction, bounds: RosterBounds) -> GameState {
    match (state.page, action) {
        (Page::Setup, GameAction::SetPlayer { index, name }) => {
            state.roster.set(index, name);
        }
        (Page::Setup, GameAction::AddPlayer) => {
            state.roster.push_blank(bounds);
        }
        (Page::Setup, GameAction::RemovePlayer { index }) => {
            state.roster.remove(index, bounds);
        }
        (Page::Setup, GameAction::StartGame { pair, impostor }) => {
            if !state.roster.is_ready(bounds) {
                debug!(
                    filled = state.roster.filled_count(),
                    "Start ignored, roster not ready"
                );
                return state;
            }
            let roster = state.roster.compacted();
            if impostor >= roster.len() {
                debug!(impostor, players = roster.len(), "Start ignored, bad impostor");
                return state;
            }
            state.round = Some(Round {
                pair,
                impostor,
                answers: vec![String::new(); roster.len()],
            });
            state.roster = roster;
            state.page = Page::Cards;
            state.current_player = 0;
        }
        (Page::Cards, GameAction::RecordAnswer(text)) => {
            let index = state.current_player;
            if let Some(slot) = state
                .round
                .as_mut()
                .and_then(|round| round.answers.get_mut(index))
            {
                *slot = text;
            }
        }
        (Page::Cards, GameAction::AdvanceTurn) => {
            if state.is_last_turn() {
                state.page = Page::RevealPrompt;
            } else {
                state.current_player += 1;
            }
        }
        (Page::RevealPrompt, GameAction::RevealAnswers) => {
            state.page = Page::Discussion;
        }
        (Page::Discussion, GameAction::RevealImpostor) => {
            state.page = Page::Reveal;
        }
        (_, GameAction::ResetToSetup) => {
            state.round = None;
            state.page = Page::Setup;
            state.current_player = 0;
        }
        (page, action) => {
            debug!(?page, ?action, "Action ignored on this page");
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Role, Roster};
    use test_case::test_case;

    fn pair() -> QuestionPair {
        QuestionPair::new("Best pizza topping?", "Worst pizza topping?")
    }

    fn apply(state: GameState, action: GameAction) -> GameState {
        transition(state, action, RosterBounds::STANDARD)
    }

    fn started(names: Vec<&str>, impostor: usize) -> GameState {
        apply(
            GameState::new(Roster::from(names)),
            GameAction::StartGame {
                pair: pair(),
                impostor,
            },
        )
    }

    #[test_case(3)]
    #[test_case(4)]
    #[test_case(5)]
    #[test_case(6)]
    #[test_case(7)]
    #[test_case(8)]
    #[test_case(9)]
    #[test_case(10)]
    fn test_start_creates_blank_answer_per_player(count: usize) {
        let names: Vec<String> = (0..count).map(|i| format!("P{i}")).collect();
        let state = apply(
            GameState::new(Roster::new(names)),
            GameAction::StartGame {
                pair: pair(),
                impostor: count - 1,
            },
        );

        assert_eq!(state.page(), Page::Cards);
        assert_eq!(state.current_player_index(), 0);
        assert_eq!(state.answers().len(), count);
        assert!(state.answers().iter().all(String::is_empty));
    }

    #[test]
    fn test_start_requires_ready_roster() {
        let state = started(vec!["Amy", "", ""], 0);
        assert_eq!(state.page(), Page::Setup);
        assert!(state.round().is_none());
    }

    #[test]
    fn test_start_compacts_roster() {
        let state = started(vec!["Amy", "", " Bo ", "Cid"], 2);
        assert_eq!(state.roster().names(), ["Amy", "Bo", "Cid"]);
        assert_eq!(state.impostor_name(), Some("Cid"));
    }

    #[test]
    fn test_start_rejects_out_of_range_impostor() {
        let state = started(vec!["Amy", "Bo", "Cid"], 3);
        assert_eq!(state.page(), Page::Setup);
    }

    #[test]
    fn test_impostor_gets_variant_question() {
        let state = started(vec!["Amy", "Bo", "Cid"], 1);
        assert_eq!(state.role_of(1), Some(Role::Impostor));
        assert_eq!(state.question_for(1), Some("Worst pizza topping?"));
        assert_eq!(state.question_for(0), Some("Best pizza topping?"));
        assert_eq!(state.question_for(2), Some("Best pizza topping?"));
    }

    #[test]
    fn test_turns_visit_every_player_once() {
        let mut state = started(vec!["Amy", "Bo", "Cid", "Dee"], 0);
        let mut visited = Vec::new();

        while state.page() == Page::Cards {
            visited.push(state.current_player_index());
            state = apply(state, GameAction::AdvanceTurn);
        }

        assert_eq!(visited, [0, 1, 2, 3]);
        assert_eq!(state.page(), Page::RevealPrompt);
    }

    #[test]
    fn test_record_answer_targets_current_player() {
        let mut state = started(vec!["Amy", "Bo", "Cid"], 0);
        state = apply(state, GameAction::AdvanceTurn);
        state = apply(state, GameAction::RecordAnswer("pineapple".into()));
        assert_eq!(state.answers(), ["", "pineapple", ""]);
    }

    #[test]
    fn test_roster_actions_ignored_during_round() {
        let state = started(vec!["Amy", "Bo", "Cid", "Dee"], 0);
        let after = apply(state.clone(), GameAction::RemovePlayer { index: 0 });
        assert_eq!(after, state);
        let after = apply(state.clone(), GameAction::AddPlayer);
        assert_eq!(after, state);
        let after = apply(
            state.clone(),
            GameAction::SetPlayer {
                index: 0,
                name: "Zed".into(),
            },
        );
        assert_eq!(after, state);
    }

    #[test]
    fn test_reveal_actions_require_their_page() {
        let state = started(vec!["Amy", "Bo", "Cid"], 0);
        assert_eq!(
            apply(state.clone(), GameAction::RevealImpostor).page(),
            Page::Cards
        );
        assert_eq!(
            apply(state.clone(), GameAction::RevealAnswers).page(),
            Page::Cards
        );
        let setup = GameState::new(Roster::blank(3));
        assert_eq!(apply(setup, GameAction::AdvanceTurn).page(), Page::Setup);
    }

    #[test]
    fn test_full_page_sequence() {
        let mut state = started(vec!["Amy", "Bo", "Cid"], 2);
        for _ in 0..3 {
            state = apply(state, GameAction::AdvanceTurn);
        }
        assert_eq!(state.page(), Page::RevealPrompt);
        state = apply(state, GameAction::RevealAnswers);
        assert_eq!(state.page(), Page::Discussion);
        state = apply(state, GameAction::RevealImpostor);
        assert_eq!(state.page(), Page::Reveal);
    }

    #[test_case(0 ; "from cards")]
    #[test_case(3 ; "from reveal prompt")]
    #[test_case(5 ; "from reveal")]
    fn test_reset_keeps_roster_and_clears_round(steps: usize) {
        let mut state = started(vec!["Amy", "Bo", "Cid"], 1);
        let script = [
            GameAction::AdvanceTurn,
            GameAction::AdvanceTurn,
            GameAction::AdvanceTurn,
            GameAction::RevealAnswers,
            GameAction::RevealImpostor,
        ];
        for action in script.into_iter().take(steps) {
            state = apply(state, action);
        }

        let reset = apply(state, GameAction::ResetToSetup);

        assert_eq!(reset.page(), Page::Setup);
        assert_eq!(reset.roster().names(), ["Amy", "Bo", "Cid"]);
        assert!(reset.question_pair().is_none());
        assert!(reset.impostor_name().is_none());
        assert!(reset.answers().is_empty());
        assert_eq!(reset.current_player_index(), 0);
    }
}
