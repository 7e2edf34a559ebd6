use crate::QuestApp;
use crate::ui::layout::screen_panel;
use egui::{Align2, Color32, Context, FontId, pos2};

/// Menú simple de texto, sin arte propio.
pub fn ui_menu(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let painter = ui.painter();
        painter.text(
            pos2(app.layout.width / 2.0, 150.0),
            Align2::CENTER_CENTER,
            "Photo Quest",
            FontId::proportional(app.layout.font_large()),
            Color32::WHITE,
        );
        let lines = [
            "Pulsa cualquier tecla o haz click para jugar",
            "ESC para salir · F11 pantalla completa",
        ];
        for (i, line) in lines.iter().enumerate() {
            painter.text(
                pos2(app.layout.width / 2.0, 250.0 + i as f32 * 50.0),
                Align2::CENTER_CENTER,
                *line,
                FontId::proportional(app.layout.font_medium()),
                Color32::WHITE,
            );
        }
    });
}
