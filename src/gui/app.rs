use eframe::egui;

use super::{
    card_grid::card_grid,
    controls::controls_row,
    error_modal::ErrorModal,
    message_overlay::MessageOverlay,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::core::{
    api,
    tasks::{
        TaskManager,
        TaskResult,
    },
    CardStore,
};

pub struct QuizApp {
    // Deck state
    store: CardStore,
    deck_loaded: bool,
    endpoint: String,

    // UI state
    theme: Theme,
    message_overlay: MessageOverlay,
    error_modal: ErrorModal,

    task_manager: TaskManager,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_endpoint(cc, api::DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(cc: &eframe::CreationContext<'_>, endpoint: String) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        set_theme(&cc.egui_ctx, Theme::dracula());

        let task_manager = TaskManager::new();
        task_manager.fetch_cards(endpoint.clone());

        Self {
            store: CardStore::new(),
            deck_loaded: false,
            endpoint,
            theme: Theme::dracula(),
            message_overlay: MessageOverlay::new(),
            error_modal: ErrorModal::new(),
            task_manager,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }

            TaskResult::CardsLoaded(result) => {
                self.message_overlay.clear_message();

                match result {
                    Ok(cards) => {
                        println!("Loaded {} flashcards", cards.len());
                        self.store.replace_cards(cards);
                        self.deck_loaded = true;
                    }
                    Err(error_msg) => {
                        // The grid stays empty; the modal is the only
                        // user-visible trace of the failure.
                        eprintln!("Failed to fetch flashcards: {}", error_msg);
                        self.deck_loaded = false;
                        self.error_modal.show_error(
                            "Fetch Error",
                            "Unable to load the flashcard deck",
                            Some(&error_msg),
                        );
                    }
                }
            }
        }
    }

    fn reload_cards(&mut self) {
        self.message_overlay.set_message("Fetching flashcards...".to_string());
        self.task_manager.fetch_cards(self.endpoint.clone());
    }
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(action) = TopBar::show(ctx, self.deck_loaded) {
            match action {
                TopBarAction::ReloadCards => self.reload_cards(),
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.theme.heading(ctx, "Flashcard Quiz"));
            ui.add_space(8.0);

            controls_row(ui, &mut self.store);
            ui.add_space(8.0);

            card_grid(ui, &mut self.store, &self.theme);
        });

        self.message_overlay.show(ctx, &self.theme);
        self.error_modal.show(ctx);
    }
}
