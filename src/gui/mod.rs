pub mod app;
pub mod card_grid;
pub mod controls;
pub mod error_modal;
pub mod message_overlay;
pub mod theme;
pub mod top_bar;

pub use app::QuizApp;
