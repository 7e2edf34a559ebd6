use crate::QuestApp;
use crate::ui::layout::{draw_artwork, fallback_title, footer, screen_panel};
use egui::Context;

/// Presentación del mapa tras la intro: desde aquí se entra al modo
/// historia (1-3) o se sigue al mapa interactivo.
pub fn ui_map(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let art = app.bank.map.base.clone();
        if draw_artwork(app, ui, &art).is_none() {
            fallback_title(app, ui, "EL MAPA");
        }
        footer(
            app,
            ui,
            "1-3 para ver una historia · ESPACIO o click para ir al mapa",
        );
    });
}
