mod answer_input;
mod confirm_popup;
mod footer_bar;
mod header_bar;
mod input;

pub use answer_input::{AnswerInputAction, AnswerInputState, AnswerInputStyle};
pub use confirm_popup::ConfirmPopup;
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
