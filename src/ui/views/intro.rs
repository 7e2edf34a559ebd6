use crate::QuestApp;
use crate::ui::layout::{draw_artwork, fallback_title, footer, header, screen_panel};
use egui::Context;

pub fn ui_intro(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let total = app.bank.intro_pages.len();
        let page = app.intro_page.min(total.saturating_sub(1));
        let art = app.bank.intro_pages.get(page).map(|p| p.image.clone());
        let drawn = art
            .as_deref()
            .and_then(|path| draw_artwork(app, ui, path));
        if drawn.is_none() {
            fallback_title(app, ui, "Cargando aventura...");
        }

        header(app, ui, &format!("Intro {} de {total}", page + 1));
        let last = page + 1 >= total;
        footer(
            app,
            ui,
            if last {
                "Pulsa cualquier tecla o haz click para ver el mapa..."
            } else {
                "Pulsa cualquier tecla o haz click para continuar..."
            },
        );
    });
}
