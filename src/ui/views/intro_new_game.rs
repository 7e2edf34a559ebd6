use crate::QuestApp;
use crate::ui::layout::{draw_artwork, fallback_title, footer, screen_panel};
use egui::Context;

pub fn ui_intro_new_game(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let art = app.bank.new_game.image.clone();
        if draw_artwork(app, ui, &art).is_none() {
            fallback_title(app, ui, "¡Empieza la aventura!");
        }
        footer(
            app,
            ui,
            "Pulsa cualquier tecla o haz click para empezar el nivel 1",
        );
    });
}
