use eframe::egui::{
    TextEdit,
    Ui,
};

use crate::core::{
    CardStore,
    CATEGORIES,
};

/// The fixed category buttons and the search box. Clicking a category sets
/// the category filter; any edit of the search text clears it again (the
/// store enforces that, not the widget).
pub fn controls_row(ui: &mut Ui, store: &mut CardStore) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for category in CATEGORIES {
            let selected = store.selected_category() == Some(category);
            if ui.selectable_label(selected, category).clicked() {
                store.set_category(category);
            }
        }

        ui.separator();

        let mut search = store.search().to_string();
        let response = ui.add(
            TextEdit::singleline(&mut search)
                .hint_text("Search questions...")
                .desired_width(220.0),
        );
        if response.changed() {
            store.set_search(&search);
        }
    });

    ui.add_space(6.0);

    let shown = store.visible_indices().len();
    let total = store.cards().len();
    ui.small(format!("{} of {} cards", shown, total));
}
