//! Application services.

pub mod game_store;
pub mod notification_manager;

pub use game_store::GameStore;
pub use notification_manager::NotificationManager;
