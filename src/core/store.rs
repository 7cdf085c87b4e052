use super::models::Flashcard;

/// Owns the loaded deck and the two filter criteria. The visible subset is
/// derived on demand with a linear scan; decks are small enough that nothing
/// is cached between frames.
#[derive(Default)]
pub struct CardStore {
    cards: Vec<Flashcard>,
    selected_category: Option<String>,
    search: String,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale replacement after a fetch completes. Filter criteria are
    /// left alone; every incoming card starts on its front face.
    pub fn replace_cards(&mut self, cards: Vec<Flashcard>) {
        self.cards = cards;
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_category(&mut self, category: &str) {
        self.selected_category = Some(category.to_string());
    }

    /// Typing in the search box always drops the category filter, even when
    /// the new text is empty. This mirrors the original interaction: the two
    /// criteria are not independently composable from the search side.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.selected_category = None;
    }

    /// Indices of cards passing both filters, in insertion order. Search is
    /// case-insensitive substring containment over the question text; an
    /// empty search matches everything.
    pub fn visible_indices(&self) -> Vec<usize> {
        let query = self.search.to_lowercase();

        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| match &self.selected_category {
                Some(category) => card.category == *category,
                None => true,
            })
            .filter(|(_, card)| query.is_empty() || card.question.to_lowercase().contains(&query))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Flips the one card with the given id. A stale id is a silent no-op.
    pub fn toggle_flip(&mut self, id: u32) {
        if let Some(card) = self.cards.iter_mut().find(|card| card.id == id) {
            card.flipped = !card.flipped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, question: &str, category: &str) -> Flashcard {
        Flashcard {
            id,
            question: question.to_string(),
            answer: format!("answer {}", id),
            image_url: None,
            category: category.to_string(),
            flipped: false,
        }
    }

    fn loaded_store() -> CardStore {
        let mut store = CardStore::new();
        store.replace_cards(vec![
            card(1, "What is the Sun?", "Astronomy"),
            card(2, "SUNSPOTS", "Astronomy"),
            card(3, "Moon facts", "Astronomy"),
            card(4, "What is ownership?", "Programming"),
            card(5, "When did Rome fall?", "History"),
        ]);
        store
    }

    #[test]
    fn replace_cards_keeps_all_records_unflipped() {
        let store = loaded_store();
        assert_eq!(store.cards().len(), 5);
        assert!(store.cards().iter().all(|c| !c.flipped));
    }

    #[test]
    fn search_clears_selected_category() {
        let mut store = loaded_store();
        store.set_category("History");
        assert_eq!(store.selected_category(), Some("History"));

        store.set_search("");
        assert_eq!(store.selected_category(), None);

        store.set_category("History");
        store.set_search("sun");
        assert_eq!(store.selected_category(), None);
        assert_eq!(store.search(), "sun");
    }

    #[test]
    fn category_filter_preserves_order() {
        let mut store = loaded_store();
        store.set_category("Astronomy");
        assert_eq!(store.visible_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut store = loaded_store();
        store.set_search("sun");
        let visible: Vec<&str> = store
            .visible_indices()
            .into_iter()
            .map(|idx| store.card(idx).unwrap().question.as_str())
            .collect();
        assert_eq!(visible, vec!["What is the Sun?", "SUNSPOTS"]);
    }

    #[test]
    fn empty_search_matches_everything() {
        let mut store = loaded_store();
        store.set_search("");
        assert_eq!(store.visible_indices().len(), 5);
    }

    #[test]
    fn toggle_flip_twice_round_trips() {
        let mut store = loaded_store();
        store.toggle_flip(3);
        assert!(store.cards()[2].flipped);
        store.toggle_flip(3);
        assert!(!store.cards()[2].flipped);
    }

    #[test]
    fn toggle_flip_stale_id_is_a_no_op() {
        let mut store = loaded_store();
        store.toggle_flip(99);
        assert!(store.cards().iter().all(|c| !c.flipped));
        assert_eq!(store.cards().len(), 5);
    }

    #[test]
    fn toggle_flip_leaves_other_cards_alone() {
        let mut store = loaded_store();
        store.toggle_flip(2);
        let flipped: Vec<u32> =
            store.cards().iter().filter(|c| c.flipped).map(|c| c.id).collect();
        assert_eq!(flipped, vec![2]);
    }

    #[test]
    fn category_then_search_then_flip_scenario() {
        let mut store = CardStore::new();
        store.replace_cards(vec![
            card(1, "What is a borrow checker?", "Programming"),
            card(2, "What is a trait?", "Programming"),
            card(3, "When did Rome fall?", "History"),
        ]);

        store.set_category("Programming");
        assert_eq!(store.visible_indices().len(), 2);

        store.set_search("xyz");
        assert_eq!(store.visible_indices().len(), 0);
        assert_eq!(store.selected_category(), None);

        store.set_search("");
        let first = store.visible_indices()[0];
        let first_id = store.card(first).unwrap().id;
        store.toggle_flip(first_id);
        assert!(store.cards()[0].flipped);
        assert!(!store.cards()[1].flipped);
        assert!(!store.cards()[2].flipped);
    }
}
