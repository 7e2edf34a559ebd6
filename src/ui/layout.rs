use crate::QuestApp;
use crate::app::{RegionId, ScreenLayout};
use egui::{
    Align2, CentralPanel, Color32, Context, CornerRadius, FontId, Rect, Stroke, StrokeKind, Ui,
    pos2, vec2,
};

/// Colores de trazo del lienzo de ejercicios (teclas 1-5).
pub const DRAW_COLORS: [Color32; 5] = [
    Color32::RED,
    Color32::GREEN,
    Color32::BLUE,
    Color32::YELLOW,
    Color32::WHITE,
];

fn uv_full() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0))
}

/// Panel a pantalla completa con fondo negro; todas las vistas pintan
/// dentro de esto.
pub fn screen_panel(ctx: &Context, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default()
        .frame(egui::Frame::default().fill(Color32::BLACK))
        .show(ctx, |ui| inner(ui));
}

/// Pinta el arte escalado y centrado y registra su rectángulo para el
/// manejador de entrada del siguiente evento. None si el arte falta.
pub fn draw_artwork(app: &mut QuestApp, ui: &Ui, path: &str) -> Option<Rect> {
    let texture = app.assets.texture(ui.ctx(), path)?;
    let rect = app.layout.artwork_rect(texture.size_vec2());
    ui.painter()
        .image(texture.id(), rect, uv_full(), Color32::WHITE);
    app.regions.set(RegionId::Artwork, rect);
    Some(rect)
}

/// Igual que `draw_artwork`, registrando además la esquina de mecánicas.
pub fn draw_artwork_with_mechanics(app: &mut QuestApp, ui: &Ui, path: &str) -> Option<Rect> {
    let rect = draw_artwork(app, ui, path)?;
    app.regions
        .set(RegionId::MechanicsCorner, ScreenLayout::mechanics_corner(rect));
    Some(rect)
}

/// Texto de reserva cuando el arte de la pantalla no está.
pub fn fallback_title(app: &QuestApp, ui: &Ui, text: &str) {
    ui.painter().text(
        app.layout.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(app.layout.font_large()),
        Color32::WHITE,
    );
}

/// Línea de instrucciones del pie, con fondo translúcido para que se
/// lea sobre el arte.
pub fn footer(app: &QuestApp, ui: &Ui, text: &str) {
    let painter = ui.painter();
    let font = FontId::proportional(app.layout.font_medium());
    let galley = painter.layout_no_wrap(text.to_owned(), font, Color32::WHITE);
    let pos = app.layout.footer_pos() - galley.size() / 2.0;
    let bg = Rect::from_min_size(pos, galley.size()).expand(8.0);
    painter.rect_filled(bg, CornerRadius::same(4), Color32::from_black_alpha(120));
    painter.galley(pos, galley, Color32::WHITE);
}

/// Contador de página en la cabecera ("Intro 1 de 2", etc.).
pub fn header(app: &QuestApp, ui: &Ui, text: &str) {
    ui.painter().text(
        app.layout.header_pos(),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(app.layout.font_medium()),
        Color32::WHITE,
    );
}

/// Barra de progreso del mapa con su texto.
pub fn progress_bar(app: &QuestApp, ui: &Ui) {
    let painter = ui.painter();
    let bar = app.layout.progress_bar_rect();

    painter.rect_filled(
        bar,
        CornerRadius::ZERO,
        Color32::from_rgba_unmultiplied(50, 50, 50, 150),
    );
    painter.rect_stroke(
        bar,
        CornerRadius::ZERO,
        Stroke::new(2.0, Color32::WHITE),
        StrokeKind::Middle,
    );

    let fraction = app.progress.fraction();
    if fraction > 0.0 {
        let fill = Rect::from_min_size(bar.min, vec2(bar.width() * fraction, bar.height()));
        painter.rect_filled(
            fill,
            CornerRadius::ZERO,
            Color32::from_rgba_unmultiplied(0, 200, 100, 180),
        );
    }

    let completed = app.progress.completed_count();
    let total = crate::model::TOTAL_LEVELS as usize * crate::model::SUBS_PER_LEVEL as usize;
    let text = if completed == 0 {
        "¡Empieza la aventura! Completa subniveles para ver tu progreso".to_owned()
    } else if completed < total {
        format!("Progreso: {completed}/{total} subniveles completados")
    } else {
        "¡Enhorabuena! ¡Mapa completado!".to_owned()
    };
    painter.text(
        pos2(bar.center().x, bar.max.y + 14.0),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(app.layout.font_small()),
        Color32::WHITE,
    );
}

/// Caja de entrada de texto sobre un velo oscuro.
pub fn text_input_box(app: &QuestApp, ui: &Ui, value: &str, title: &str) {
    let painter = ui.painter();
    painter.rect_filled(
        app.layout.bounds(),
        CornerRadius::ZERO,
        Color32::from_black_alpha(128),
    );

    let rect = app.layout.text_input_rect();
    painter.rect_filled(rect, CornerRadius::same(4), Color32::BLACK);
    painter.rect_stroke(
        rect,
        CornerRadius::same(4),
        Stroke::new(3.0, Color32::WHITE),
        StrokeKind::Outside,
    );

    let font = FontId::proportional(app.layout.font_medium());
    let galley = painter.layout_no_wrap(value.to_owned(), font.clone(), Color32::WHITE);
    let text_pos = rect.center() - galley.size() / 2.0;
    painter.galley(text_pos, galley.clone(), Color32::WHITE);

    // Cursor al final del texto.
    let cursor_x = text_pos.x + galley.size().x + 4.0;
    painter.line_segment(
        [
            pos2(cursor_x, rect.min.y + 10.0),
            pos2(cursor_x, rect.max.y - 10.0),
        ],
        Stroke::new(2.0, Color32::WHITE),
    );

    painter.text(
        pos2(rect.center().x, rect.min.y - 30.0),
        Align2::CENTER_CENTER,
        title,
        font,
        Color32::WHITE,
    );
}
