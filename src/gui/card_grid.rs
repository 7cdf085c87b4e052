use eframe::egui::{
    self,
    CornerRadius,
    Margin,
    Sense,
    Ui,
};
use egui_flex::{
    item,
    Flex,
};

use super::theme::Theme;
use crate::core::{
    CardStore,
    Flashcard,
};

const TILE_SIZE: egui::Vec2 = egui::Vec2::new(230.0, 150.0);

/// Wrapping grid of flip tiles for the currently visible cards. A click
/// anywhere on a tile toggles that one card between its question face and
/// its answer face; nothing else reacts to the click.
pub fn card_grid(ui: &mut Ui, store: &mut CardStore, theme: &Theme) {
    let visible = store.visible_indices();

    if visible.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(theme.muted(ui.ctx(), "No cards to show."));
        });
        return;
    }

    let mut clicked_id = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        Flex::horizontal().wrap(true).show(ui, |flex| {
            for idx in visible {
                let card = match store.card(idx) {
                    Some(card) => card,
                    None => continue,
                };

                flex.add_ui(item(), |ui| {
                    if card_tile(ui, card, theme).clicked() {
                        clicked_id = Some(card.id);
                    }
                });
            }
        });
    });

    if let Some(id) = clicked_id {
        store.toggle_flip(id);
    }
}

fn card_tile(ui: &mut Ui, card: &Flashcard, theme: &Theme) -> egui::Response {
    let fill = if card.flipped {
        theme.card_back(ui.ctx())
    } else {
        theme.card_front(ui.ctx())
    };

    let inner = egui::Frame::group(ui.style())
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_size(TILE_SIZE);
            ui.set_max_size(TILE_SIZE);

            if card.flipped {
                tile_back(ui, card, theme);
            } else {
                tile_front(ui, card, theme);
            }
        });

    inner.response.interact(Sense::click()).on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn tile_front(ui: &mut Ui, card: &Flashcard, theme: &Theme) {
    ui.vertical(|ui| {
        ui.label(theme.bold(ui.ctx(), &card.question).size(15.0));

        if let Some(url) = &card.image_url {
            ui.add_space(6.0);
            ui.centered_and_justified(|ui| {
                ui.add(
                    egui::Image::from_uri(url.as_str())
                        .max_height(90.0)
                        .corner_radius(CornerRadius::same(4)),
                );
            });
        }
    });
}

fn tile_back(ui: &mut Ui, card: &Flashcard, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.small(theme.muted(ui.ctx(), &card.category));
        ui.add_space(8.0);
        ui.label(theme.heading(ui.ctx(), &card.answer).size(16.0));
    });
}
