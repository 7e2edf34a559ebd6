use crate::QuestApp;
use crate::model::{SUBS_PER_LEVEL, TOTAL_LEVELS};
use crate::ui::layout::{
    draw_artwork_with_mechanics, fallback_title, footer, progress_bar, screen_panel,
};
use egui::Context;

/// Mapa interactivo: el arte cambia con el nivel completo más alto y
/// la barra del pie refleja los subniveles terminados.
pub fn ui_map_image(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let highest = app.progress.highest_completed_level();
        let art = app.bank.map_artifact(highest).to_owned();
        if draw_artwork_with_mechanics(app, ui, &art).is_none() {
            fallback_title(app, ui, "Mapa no encontrado");
        }

        progress_bar(app, ui);

        let completed = app.progress.completed_count();
        let total = TOTAL_LEVELS as usize * SUBS_PER_LEVEL as usize;
        let text = if completed == 0 {
            "Pulsa 1-9 (0 = nivel 10) para empezar, ESC para volver".to_owned()
        } else if completed < total {
            format!("Pulsa 1-9 (0 = nivel 10) · {completed}/{total} completados · ESC vuelve")
        } else {
            "¡Todo completado! Pulsa 1-9 (0 = nivel 10) para rejugar, ESC para volver".to_owned()
        };
        footer(app, ui, &text);
    });
}
