pub mod api;
pub mod errors;
pub mod models;
pub mod store;
pub mod tasks;

pub use errors::FlipdeckError;
pub use models::{
    Flashcard,
    CATEGORIES,
};
pub use store::CardStore;
