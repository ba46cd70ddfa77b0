//! Main application orchestrator.

use std::time::{Duration, Instant};

use crossterm::event::{EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::widgets::{Block, Widget};
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::services::{GameStore, NotificationManager};
use crate::domain::Page;
use crate::presentation::events::{EventResult, is_quit_event, key_press};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    CardAction, CardScreen, DiscussionAction, DiscussionScreen, NotificationPopup, PromptAction,
    RevealAction, RevealPromptScreen, RevealScreen, SetupAction, SetupScreen,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

/// Presentation settings taken from the configuration.
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub reveal_delay: Duration,
    pub enable_animations: bool,
    pub notification_duration: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(600),
            enable_animations: true,
            notification_duration: Duration::from_secs(3),
        }
    }
}

enum CurrentScreen {
    Setup(SetupScreen),
    Card(Box<CardScreen>),
    RevealPrompt(RevealPromptScreen),
    Discussion(DiscussionScreen),
    Reveal(RevealScreen),
}

impl CurrentScreen {
    const fn page(&self) -> Page {
        match self {
            Self::Setup(_) => Page::Setup,
            Self::Card(_) => Page::Cards,
            Self::RevealPrompt(_) => Page::RevealPrompt,
            Self::Discussion(_) => Page::Discussion,
            Self::Reveal(_) => Page::Reveal,
        }
    }
}

pub struct App {
    store: GameStore,
    screen: CurrentScreen,
    theme: Theme,
    notifications: NotificationManager,
    options: AppOptions,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(store: GameStore, theme: Theme, options: AppOptions) -> Self {
        let mut app = Self {
            store,
            screen: CurrentScreen::Setup(SetupScreen::new()),
            theme,
            notifications: NotificationManager::new(options.notification_duration),
            options,
            exiting: false,
        };
        app.sync_screen();
        app
    }

    /// # Errors
    /// Returns error if drawing to the terminal or reading its events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        info!(page = ?self.store.page(), "Game ready");
        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                _ = animation_interval.tick() => {
                    if self.tick(ANIMATION_TICK_RATE, Instant::now()) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(key) = key_press(&event)
                                && self.handle_key(key, Instant::now()) == EventResult::Exit
                            {
                                self.exiting = true;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.exiting = true,
                    }
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    /// Advances animations and notifications. Returns whether a redraw is needed.
    fn tick(&mut self, elapsed: Duration, now: Instant) -> bool {
        let had_notification = self.notifications.has_notifications();
        self.notifications.tick(now);

        let animating = match &mut self.screen {
            CurrentScreen::Card(card) => {
                card.tick(elapsed);
                card.is_animating()
            }
            CurrentScreen::Reveal(reveal) => {
                reveal.tick(elapsed);
                reveal.is_animating()
            }
            _ => false,
        };

        animating || had_notification
    }

    /// Rebuilds the screen when the page or the player holding the device changed.
    fn sync_screen(&mut self) {
        let state = self.store.state();
        let page = state.page();
        let player = state.current_player_index();

        let stale = match &self.screen {
            CurrentScreen::Card(card) => page != Page::Cards || card.player() != player,
            screen => screen.page() != page,
        };

        if stale {
            debug!(?page, player, "Switching screen");
            self.screen = match page {
                Page::Setup => CurrentScreen::Setup(SetupScreen::new()),
                Page::Cards => CurrentScreen::Card(Box::new(CardScreen::new(
                    player,
                    self.options.reveal_delay,
                    self.options.enable_animations,
                ))),
                Page::RevealPrompt => CurrentScreen::RevealPrompt(RevealPromptScreen::new()),
                Page::Discussion => CurrentScreen::Discussion(DiscussionScreen::new()),
                Page::Reveal => {
                    CurrentScreen::Reveal(RevealScreen::new(self.options.enable_animations))
                }
            };
        }

        if let CurrentScreen::Setup(setup) = &mut self.screen {
            setup.sync(self.store.state().roster(), &self.theme);
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let buf = frame.buffer_mut();
        Block::default().style(self.theme.base_style).render(area, buf);

        let state = self.store.state();
        match &mut self.screen {
            CurrentScreen::Setup(screen) => {
                screen.render(area, buf, state.roster(), self.store.bounds(), &self.theme);
            }
            CurrentScreen::Card(screen) => screen.render(area, buf, state, &self.theme),
            CurrentScreen::RevealPrompt(screen) => {
                screen.render(area, buf, state.roster().len(), &self.theme);
            }
            CurrentScreen::Discussion(screen) => screen.render(area, buf, state, &self.theme),
            CurrentScreen::Reveal(screen) => screen.render(area, buf, state, &self.theme),
        }

        if let Some(notification) = self.notifications.current_notification() {
            NotificationPopup::new(notification, &self.theme).render(area, buf);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> EventResult {
        if is_quit_event(&key) {
            return EventResult::Exit;
        }

        let result = match &mut self.screen {
            CurrentScreen::Setup(screen) => {
                let action = screen.handle_key(key);
                self.handle_setup_action(action)
            }
            CurrentScreen::Card(screen) => match screen.handle_key(key, now) {
                CardAction::Submit(text) => {
                    self.store.submit_answer(text);
                    EventResult::Consumed
                }
                CardAction::RestartRound => {
                    info!("Round restarted from the cards");
                    self.store.reset_to_setup();
                    EventResult::Consumed
                }
                CardAction::Quit => EventResult::Exit,
                CardAction::None => EventResult::Continue,
            },
            CurrentScreen::RevealPrompt(screen) => match screen.handle_key(key) {
                PromptAction::RevealAnswers => {
                    self.store.reveal_answers();
                    EventResult::Consumed
                }
                PromptAction::Quit => EventResult::Exit,
                PromptAction::None => EventResult::Continue,
            },
            CurrentScreen::Discussion(screen) => match screen.handle_key(key) {
                DiscussionAction::RevealImpostor => {
                    self.store.reveal_impostor();
                    EventResult::Consumed
                }
                DiscussionAction::Quit => EventResult::Exit,
                DiscussionAction::None => EventResult::Continue,
            },
            CurrentScreen::Reveal(screen) => match screen.handle_key(key) {
                RevealAction::PlayAgain => {
                    self.store.reset_to_setup();
                    EventResult::Consumed
                }
                RevealAction::Quit => EventResult::Exit,
                RevealAction::None => EventResult::Continue,
            },
        };

        self.sync_screen();
        result
    }

    fn handle_setup_action(&mut self, action: SetupAction) -> EventResult {
        let bounds = self.store.bounds();
        match action {
            SetupAction::Rename { index, name } => {
                self.store.set_player(index, name);
            }
            SetupAction::AddPlayer => {
                if self.store.add_player() {
                    let last = self.store.state().roster().len().saturating_sub(1);
                    self.sync_screen();
                    if let CurrentScreen::Setup(setup) = &mut self.screen {
                        setup.focus_slot(last);
                    }
                } else {
                    self.notifications.warn(
                        "Roster full",
                        format!("At most {} players can join", bounds.max()),
                    );
                }
            }
            SetupAction::RemovePlayer(index) => {
                if !self.store.remove_player(index) {
                    self.notifications.warn(
                        "Need more players",
                        format!("At least {} players are needed", bounds.min()),
                    );
                }
            }
            SetupAction::StartGame => match self.store.start_game() {
                Ok(()) => {}
                Err(e) if e.is_user_fixable() => {
                    self.notifications.warn("Not ready", e.to_string());
                }
                Err(e) => warn!(error = %e, "Could not start game"),
            },
            SetupAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                info!(variant = self.theme.variant.label(), "Theme toggled");
            }
            SetupAction::Quit => return EventResult::Exit,
            SetupAction::None => return EventResult::Continue,
        }
        EventResult::Consumed
    }
}
