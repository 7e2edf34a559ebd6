use crate::QuestApp;
use crate::ui::layout::{draw_artwork, fallback_title, footer, header, screen_panel};
use egui::Context;

pub fn ui_mechanics(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let total = app.bank.mechanics_pages.len();
        let page = app.mechanics_page.min(total.saturating_sub(1));
        let art = app.bank.mechanics_pages.get(page).cloned();
        let drawn = art
            .as_deref()
            .and_then(|path| draw_artwork(app, ui, path));
        if drawn.is_none() {
            fallback_title(app, ui, "Mecánicas del juego");
        }

        if total > 1 {
            header(app, ui, &format!("Página {} de {total}", page + 1));
        }
        footer(
            app,
            ui,
            "Flechas IZQ/DER para pasar página · ESC o click para volver",
        );
    });
}
