use eframe::egui::{
    self,
    containers,
};

#[derive(Debug, Clone, Copy)]
pub enum TopBarAction {
    ReloadCards,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, deck_loaded: bool) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Reload Cards").clicked() {
                        action = Some(TopBarAction::ReloadCards);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_deck_status(ui, deck_loaded);
                });
            });
        });

        action
    }

    fn show_deck_status(ui: &mut egui::Ui, deck_loaded: bool) {
        let color = if deck_loaded {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if deck_loaded { "Deck loaded" } else { "Deck not loaded" };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Deck").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
