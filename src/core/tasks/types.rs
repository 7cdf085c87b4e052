use crate::core::models::Flashcard;

#[derive(Debug, Clone)]
pub enum TaskResult {
    CardsLoaded(Result<Vec<Flashcard>, String>),
    LoadingMessage(String),
}
