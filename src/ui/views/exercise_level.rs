use crate::QuestApp;
use crate::ui::layout::{
    DRAW_COLORS, draw_artwork_with_mechanics, fallback_title, footer, screen_panel, text_input_box,
};
use egui::{Align2, Color32, Context, FontId, Shape, Stroke, pos2};

pub fn ui_exercise_level(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let level = app.exercise.level;
        let art = app.bank.exercise(level).map(|e| e.image.clone());
        let drawn = art
            .as_deref()
            .and_then(|path| draw_artwork_with_mechanics(app, ui, path));
        if drawn.is_none() {
            fallback_title(app, ui, &format!("EJERCICIO {level}"));
        }

        // Trazos a mano alzada sobre el arte.
        let painter = ui.painter();
        for stroke in app
            .exercise
            .strokes
            .iter()
            .chain(app.exercise.current_stroke.iter())
        {
            if stroke.points.len() > 1 {
                let color = DRAW_COLORS[stroke.color % DRAW_COLORS.len()];
                painter.add(Shape::line(stroke.points.clone(), Stroke::new(3.0, color)));
            }
        }

        // Color activo y estado de los tres huecos.
        let color = DRAW_COLORS[app.exercise.color_index % DRAW_COLORS.len()];
        let status: String = app
            .exercise
            .solved
            .iter()
            .map(|&done| if done { " ✔" } else { " ·" })
            .collect();
        painter.text(
            pos2(20.0, 20.0),
            Align2::LEFT_TOP,
            format!("Color de trazo · Respuestas:{status}"),
            FontId::proportional(app.layout.font_small()),
            color,
        );

        if let Some(entry) = app.exercise.entry.clone() {
            let slot = app.exercise.next_slot().unwrap_or(0) + 1;
            text_input_box(app, ui, &entry, &format!("Respuesta {slot} de 3:"));
            footer(app, ui, "Escribe la respuesta y pulsa ENTER, ESC para cerrar");
        } else if app.exercise.all_solved() {
            footer(app, ui, "¡Ejercicio completado! ESC para volver");
        } else {
            footer(
                app,
                ui,
                "Dibuja con el ratón · C borra · 1-5 color · ESPACIO responde · ESC vuelve",
            );
        }

        if !app.message.is_empty() {
            let msg = app.message.clone();
            let painter = ui.painter();
            painter.text(
                pos2(app.layout.width / 2.0, 80.0),
                Align2::CENTER_CENTER,
                msg,
                FontId::proportional(app.layout.font_medium()),
                Color32::YELLOW,
            );
        }
    });
}
