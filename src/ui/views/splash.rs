use crate::QuestApp;
use crate::app::{RegionId, ScreenLayout};
use crate::ui::layout::{draw_artwork_with_mechanics, fallback_title, footer, screen_panel};
use egui::Context;

pub fn ui_splash(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let splash = app.bank.splash.clone();
        match draw_artwork_with_mechanics(app, ui, &splash) {
            Some(rect) => {
                // El engranaje de la esquina también abre las mecánicas.
                app.regions
                    .set(RegionId::GearIcon, ScreenLayout::gear_rect(rect));
            }
            None => fallback_title(app, ui, "Photo Quest"),
        }
        footer(
            app,
            ui,
            "Haz click para continuar, o pulsa el engranaje para ver las mecánicas",
        );
    });
}
