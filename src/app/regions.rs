use crate::model::Screen;
use egui::{Pos2, Rect};
use std::collections::HashMap;

/// Zonas clicables con nombre, registradas por el dibujado.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionId {
    /// Engranaje del splash (acceso a mecánicas).
    GearIcon,
    /// Esquina superior derecha del arte (10% × 20%), también mecánicas.
    MechanicsCorner,
    /// Rectángulo del arte escalado de la pantalla.
    Artwork,
}

/// El dibujado de cada frame registra aquí sus rectángulos y el
/// manejador de entrada consulta los del último frame dibujado. Tras un
/// resize los rectángulos quedan obsoletos como mucho un frame: el
/// siguiente dibujado los reescribe antes de procesar más punteros.
#[derive(Clone, Debug, Default)]
pub struct FrameRegions {
    screen: Option<Screen>,
    regions: HashMap<RegionId, Rect>,
}

impl FrameRegions {
    /// Arranca el registro del frame: borra lo del frame anterior.
    pub fn begin(&mut self, screen: Screen) {
        self.screen = Some(screen);
        self.regions.clear();
    }

    pub fn set(&mut self, id: RegionId, rect: Rect) {
        self.regions.insert(id, rect);
    }

    pub fn get(&self, id: RegionId) -> Option<Rect> {
        self.regions.get(&id).copied()
    }

    /// Pantalla a la que pertenecen los rectángulos registrados.
    pub fn screen(&self) -> Option<Screen> {
        self.screen
    }

    pub fn hit(&self, id: RegionId, pos: Pos2) -> bool {
        self.get(id).map(|r| r.contains(pos)).unwrap_or(false)
    }
}
