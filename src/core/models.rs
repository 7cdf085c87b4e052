use serde::Deserialize;

/// The fixed set of categories shown as filter buttons.
pub const CATEGORIES: [&str; 4] = ["Programming", "History", "English", "Astronomy"];

/// A single question/answer card. Ids are assigned by the remote deck and are
/// unique within one load. `flipped` is client-only state: the wire payload
/// never carries it, and it is the only field mutated after load.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: u32,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    #[serde(skip)]
    pub flipped: bool,
}

/// Wire shape of the flashcard endpoint: `{ "results": [...] }`.
#[derive(Debug, Deserialize)]
pub struct FlashcardResponse {
    pub results: Vec<Flashcard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let body = serde_json::json!({
            "results": [
                {
                    "id": 1,
                    "question": "What is the Sun?",
                    "answer": "A star",
                    "imageUrl": "https://example.com/sun.png",
                    "category": "Astronomy"
                },
                {
                    "id": 2,
                    "question": "Who wrote Hamlet?",
                    "answer": "Shakespeare",
                    "category": "English"
                }
            ]
        });

        let response: FlashcardResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.results.len(), 2);

        let sun = &response.results[0];
        assert_eq!(sun.id, 1);
        assert_eq!(sun.image_url.as_deref(), Some("https://example.com/sun.png"));
        assert!(!sun.flipped);

        let hamlet = &response.results[1];
        assert_eq!(hamlet.category, "English");
        assert!(hamlet.image_url.is_none());
        assert!(!hamlet.flipped);
    }
}
