//! UI screens.

mod app;
mod card_screen;
mod discussion_screen;
mod notification_popup;
mod reveal_prompt_screen;
mod reveal_screen;
mod setup_screen;
mod utils;

pub use app::{App, AppOptions};
pub use card_screen::{CardAction, CardScreen};
pub use discussion_screen::{DiscussionAction, DiscussionScreen};
pub use notification_popup::NotificationPopup;
pub use reveal_prompt_screen::{PromptAction, RevealPromptScreen};
pub use reveal_screen::{RevealAction, RevealScreen};
pub use setup_screen::{SetupAction, SetupScreen};
