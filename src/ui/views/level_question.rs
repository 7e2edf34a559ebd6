use crate::QuestApp;
use crate::ui::layout::{draw_artwork, fallback_title, footer, screen_panel, text_input_box};
use egui::Context;

pub fn ui_level_question(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let question = app.session.as_ref().and_then(|s| s.current()).cloned();

        match &question {
            Some(q) => {
                let image = q.image.clone();
                if draw_artwork(app, ui, &image).is_none() {
                    let ordinal = app.session.as_ref().map(|s| s.index() + 1).unwrap_or(0);
                    fallback_title(app, ui, &format!("Pregunta {ordinal}"));
                }
            }
            None => fallback_title(app, ui, "¡Nivel completado!"),
        }

        let entry = app.session.as_ref().and_then(|s| s.text_entry.clone());
        if let Some(value) = entry {
            text_input_box(app, ui, &value, "Escribe tu respuesta:");
            footer(app, ui, "Escribe la respuesta y pulsa ENTER, ESC para cerrar");
            return;
        }

        let instruction = match &question {
            Some(q) if q.needs_text_input() => {
                "Pulsa ESPACIO o haz click para escribir la respuesta, ESC vuelve al mapa"
            }
            Some(q) if q.is_scenario() => {
                "Haz click o pulsa ESPACIO para continuar, ESC vuelve al mapa"
            }
            _ => "Pulsa 1-4 para responder, ESC vuelve al mapa",
        };
        footer(app, ui, instruction);
    });
}
