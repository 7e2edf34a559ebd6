use crate::QuestApp;
use crate::ui::layout::{draw_artwork, fallback_title, footer, header, screen_panel};
use egui::Context;

pub fn ui_slideshow(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let photos = app
            .bank
            .slideshow(app.slideshow_level)
            .map(|s| s.photos.clone())
            .unwrap_or_default();

        if photos.is_empty() {
            fallback_title(app, ui, "No hay fotos para esta historia");
        } else {
            let index = app.slideshow_index.min(photos.len() - 1);
            if draw_artwork(app, ui, &photos[index]).is_none() {
                fallback_title(app, ui, "Foto no encontrada");
            }
            header(
                app,
                ui,
                &format!(
                    "Historia {} · Foto {} de {}",
                    app.slideshow_level,
                    index + 1,
                    photos.len()
                ),
            );
        }

        footer(
            app,
            ui,
            "Flechas IZQ/DER o ESPACIO para pasar foto · ESC o click para volver",
        );
    });
}
