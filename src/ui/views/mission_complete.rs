use crate::QuestApp;
use crate::model::SequenceKind;
use crate::ui::layout::{draw_artwork, fallback_title, footer, screen_panel};
use egui::Context;

/// Celebración al acabar: un arte para el subnivel, tres pasos
/// (estrellas → misión 1 → misión 2) para el nivel entero.
pub fn ui_mission_complete(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let art = match app.mission {
            Some(mission) => match mission.kind {
                SequenceKind::Sublevel => app.bank.mission.sublevel_clear.clone(),
                SequenceKind::Level => app
                    .bank
                    .mission
                    .level_steps
                    .get(mission.step)
                    .cloned()
                    .unwrap_or_else(|| app.bank.mission.sublevel_clear.clone()),
            },
            None => app.bank.mission.sublevel_clear.clone(),
        };
        if draw_artwork(app, ui, &art).is_none() {
            fallback_title(app, ui, "¡MISIÓN CUMPLIDA!");
        }
        footer(app, ui, "Pulsa cualquier tecla o haz click para continuar");
    });
}
