use crate::QuestApp;
use crate::ui::layout::{draw_artwork_with_mechanics, fallback_title, footer, screen_panel};
use egui::Context;

pub fn ui_second_page(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let art = app.bank.second_page.clone();
        if draw_artwork_with_mechanics(app, ui, &art).is_none() {
            fallback_title(app, ui, "Photo Quest");
        }
        footer(
            app,
            ui,
            "1 Ejercicios · 2 Mapa · 3 Partida nueva · M Menú · esquina superior derecha: mecánicas",
        );
    });
}
