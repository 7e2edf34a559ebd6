use egui::{Pos2, Rect, Vec2, pos2, vec2};

/// Suelo de la ventana: por debajo de esto no se encoge.
pub const MIN_WIDTH: f32 = 1024.0;
pub const MIN_HEIGHT: f32 = 768.0;

/// Dimensiones iniciales en modo ventana.
pub const DEFAULT_WIDTH: f32 = 1600.0;
pub const DEFAULT_HEIGHT: f32 = 1000.0;

/// Geometría derivada del tamaño de ventana. Todo lo relativo a la
/// pantalla (fuentes, zonas de click, barra de progreso) sale de aquí
/// y se recalcula al redimensionar, ya con el tamaño acotado.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLayout {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl ScreenLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            height: height.max(MIN_HEIGHT),
        }
    }

    pub fn resize(&mut self, size: Vec2) {
        *self = Self::new(size.x, size.y);
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn center(&self) -> Pos2 {
        pos2(self.width / 2.0, self.height / 2.0)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size())
    }

    // --- Fuentes ---------------------------------------------------------

    fn base_font(&self) -> f32 {
        (self.width.min(self.height) / 30.0).max(24.0)
    }

    pub fn font_large(&self) -> f32 {
        self.base_font() * 1.8
    }

    pub fn font_medium(&self) -> f32 {
        self.base_font() * 1.2
    }

    pub fn font_small(&self) -> f32 {
        self.base_font()
    }

    // --- Arte ------------------------------------------------------------

    /// Escala una imagen para que quepa centrada, conservando la
    /// proporción y dejando margen para cabecera y pie.
    pub fn artwork_rect(&self, image_size: Vec2) -> Rect {
        let avail_w = self.width - (self.width / 10.0).max(120.0);
        let avail_h = self.height - (self.height / 5.0).max(200.0);
        let scale = (avail_w / image_size.x)
            .min(avail_h / image_size.y)
            .min(1.0)
            .max(f32::EPSILON);
        let size = image_size * scale;
        Rect::from_center_size(self.center(), size)
    }

    /// Esquina superior derecha del arte: 10% de ancho, 20% de alto.
    /// Un click aquí abre las mecánicas sea cual sea la pantalla.
    pub fn mechanics_corner(artwork: Rect) -> Rect {
        Rect::from_min_size(
            pos2(artwork.min.x + artwork.width() * 0.9, artwork.min.y),
            vec2(artwork.width() * 0.1, artwork.height() * 0.2),
        )
    }

    /// Zona del engranaje del splash (85% a la derecha, 10% abajo).
    pub fn gear_rect(artwork: Rect) -> Rect {
        Rect::from_min_size(
            pos2(
                artwork.min.x + artwork.width() * 0.85,
                artwork.min.y + artwork.height() * 0.1,
            ),
            vec2(60.0, 60.0),
        )
    }

    // --- Elementos fijos --------------------------------------------------

    pub fn footer_pos(&self) -> Pos2 {
        pos2(self.width / 2.0, self.height - 20.0)
    }

    pub fn header_pos(&self) -> Pos2 {
        pos2(self.width / 2.0, 50.0)
    }

    /// Barra de progreso del mapa, en el pie.
    pub fn progress_bar_rect(&self) -> Rect {
        let bar_width = (self.width * 0.7).min(800.0);
        let bar_height = (self.height / 50.0).max(15.0);
        Rect::from_min_size(
            pos2((self.width - bar_width) / 2.0, self.height - 80.0),
            vec2(bar_width, bar_height),
        )
    }

    /// Caja de entrada de texto de las preguntas de problemas.
    pub fn text_input_rect(&self) -> Rect {
        let size = vec2(400.0, 60.0);
        Rect::from_min_size(
            pos2((self.width - size.x) / 2.0, self.height / 2.0 + 100.0),
            size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_clamps_to_floor() {
        let mut layout = ScreenLayout::default();
        layout.resize(vec2(640.0, 480.0));
        assert_eq!(layout.width, MIN_WIDTH);
        assert_eq!(layout.height, MIN_HEIGHT);
    }

    #[test]
    fn regions_stay_inside_clamped_bounds() {
        let layout = ScreenLayout::new(100.0, 100.0);
        let bounds = layout.bounds();

        let art = layout.artwork_rect(vec2(1920.0, 1080.0));
        assert!(bounds.contains_rect(art));
        assert!(bounds.contains_rect(ScreenLayout::mechanics_corner(art)));
        assert!(bounds.contains_rect(layout.progress_bar_rect()));
        assert!(bounds.contains_rect(layout.text_input_rect()));
    }

    #[test]
    fn artwork_keeps_aspect_ratio() {
        let layout = ScreenLayout::default();
        let art = layout.artwork_rect(vec2(800.0, 400.0));
        let ratio = art.width() / art.height();
        assert!((ratio - 2.0).abs() < 0.01);
    }

    #[test]
    fn artwork_never_upscales() {
        let layout = ScreenLayout::default();
        let art = layout.artwork_rect(vec2(200.0, 100.0));
        assert_eq!(art.size(), vec2(200.0, 100.0));
    }

    #[test]
    fn fonts_scale_with_window() {
        let small = ScreenLayout::new(MIN_WIDTH, MIN_HEIGHT);
        let big = ScreenLayout::new(2560.0, 1440.0);
        assert!(big.font_medium() > small.font_medium());
        assert!(small.font_small() >= 24.0);
    }
}
