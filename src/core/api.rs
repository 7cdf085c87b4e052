use reqwest::Client;

use super::{
    models::{
        Flashcard,
        FlashcardResponse,
    },
    FlipdeckError,
};

/// Default deck endpoint. There is deliberately no retry, caching, or
/// pagination here: one GET, one JSON decode.
pub const DEFAULT_ENDPOINT: &str = "https://login.yogeshwaran-r2022cse.workers.dev/flashcards";

pub async fn fetch_flashcards(endpoint: &str) -> Result<Vec<Flashcard>, FlipdeckError> {
    let response: FlashcardResponse = Client::new().get(endpoint).send().await?.json().await?;

    Ok(response.results)
}
