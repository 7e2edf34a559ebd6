use crate::QuestApp;
use crate::ui::layout::{draw_artwork_with_mechanics, fallback_title, footer, screen_panel};
use egui::Context;

pub fn ui_select(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let art = app.bank.select.clone();
        if draw_artwork_with_mechanics(app, ui, &art).is_none() {
            fallback_title(app, ui, "SELECCIONA UN EJERCICIO");
        }
        footer(
            app,
            ui,
            "Pulsa 1-9 (0 = nivel 10) para elegir ejercicio, ESC para volver",
        );
    });
}
