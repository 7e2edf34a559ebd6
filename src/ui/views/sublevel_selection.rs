use crate::QuestApp;
use crate::model::{SUBS_PER_LEVEL, SublevelId};
use crate::ui::layout::{
    draw_artwork_with_mechanics, fallback_title, footer, header, screen_panel,
};
use egui::{Align2, Color32, Context, FontId, pos2};

/// Elección de subnivel (X.1 – X.3) del nivel marcado en el mapa.
pub fn ui_sublevel_selection(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let highest = app.progress.highest_completed_level();
        let art = app.bank.map_artifact(highest).to_owned();
        if draw_artwork_with_mechanics(app, ui, &art).is_none() {
            fallback_title(app, ui, &format!("NIVEL {}", app.selected_level));
        }

        header(app, ui, &format!("Nivel {}", app.selected_level));

        // Estado de los tres subniveles, uno por línea.
        let painter = ui.painter();
        let font = FontId::proportional(app.layout.font_medium());
        let base_y = app.layout.height / 2.0 - 40.0;
        for sub in 1..=SUBS_PER_LEVEL {
            let done = SublevelId::new(app.selected_level, sub)
                .map(|id| app.progress.contains(id))
                .unwrap_or(false);
            let mark = if done { "✔" } else { "—" };
            painter.text(
                pos2(
                    app.layout.width / 2.0,
                    base_y + (sub as f32 - 1.0) * 40.0,
                ),
                Align2::CENTER_CENTER,
                format!("{}.{sub}  {mark}", app.selected_level),
                font.clone(),
                Color32::WHITE,
            );
        }

        if app.message.is_empty() {
            footer(app, ui, "Pulsa 1-3 para empezar un subnivel, ESC para volver");
        } else {
            let msg = app.message.clone();
            footer(app, ui, &msg);
        }
    });
}
