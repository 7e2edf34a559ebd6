use crate::model::{SUBS_PER_LEVEL, SublevelId, TOTAL_LEVELS};
use std::collections::BTreeSet;

/// Subniveles completados en esta sesión de juego. Solo se insertan
/// ids: no hay borrado, así la pertenencia es monótona mientras el
/// proceso vive. No se persiste nada en disco.
#[derive(Debug, Clone, Default)]
pub struct ProgressSet {
    completed: BTreeSet<SublevelId>,
}

impl ProgressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Devuelve true si el id es nuevo.
    pub fn insert(&mut self, id: SublevelId) -> bool {
        self.completed.insert(id)
    }

    pub fn contains(&self, id: SublevelId) -> bool {
        self.completed.contains(&id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Un nivel está completo si están sus tres subniveles.
    pub fn is_level_complete(&self, level: u8) -> bool {
        (1..=SUBS_PER_LEVEL).all(|sub| {
            SublevelId::new(level, sub)
                .map(|id| self.contains(id))
                .unwrap_or(false)
        })
    }

    /// Nivel completo más alto, 0 si ninguno.
    pub fn highest_completed_level(&self) -> u8 {
        (1..=TOTAL_LEVELS)
            .filter(|&level| self.is_level_complete(level))
            .max()
            .unwrap_or(0)
    }

    /// Fracción completada para la barra del mapa; se recalcula bajo
    /// demanda, sin estado extra.
    pub fn fraction(&self) -> f32 {
        let total = TOTAL_LEVELS as usize * SUBS_PER_LEVEL as usize;
        self.completed.len() as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(level: u8, sub: u8) -> SublevelId {
        SublevelId::new(level, sub).unwrap()
    }

    #[test]
    fn empty_set_is_total() {
        let progress = ProgressSet::new();
        assert_eq!(progress.fraction(), 0.0);
        assert_eq!(progress.highest_completed_level(), 0);
        assert!(!progress.is_level_complete(1));
    }

    #[test]
    fn membership_is_monotonic() {
        let mut progress = ProgressSet::new();
        assert!(progress.insert(id(2, 1)));
        assert!(!progress.insert(id(2, 1)));
        assert!(progress.contains(id(2, 1)));
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn level_complete_needs_all_three_in_any_order() {
        // Cualquier permutación de los tres subniveles da el mismo resultado.
        let orders = [[1, 2, 3], [3, 1, 2], [2, 3, 1]];
        for order in orders {
            let mut progress = ProgressSet::new();
            for (i, &sub) in order.iter().enumerate() {
                assert!(!progress.is_level_complete(4));
                progress.insert(id(4, sub));
                if i < 2 {
                    assert!(!progress.is_level_complete(4));
                }
            }
            assert!(progress.is_level_complete(4));
        }
    }

    #[test]
    fn highest_completed_scans_all_levels() {
        let mut progress = ProgressSet::new();
        for sub in 1..=3 {
            progress.insert(id(2, sub));
        }
        for sub in 1..=3 {
            progress.insert(id(7, sub));
        }
        // El nivel 5 queda a medias.
        progress.insert(id(5, 1));
        assert_eq!(progress.highest_completed_level(), 7);
    }

    #[test]
    fn fraction_counts_sublevels() {
        let mut progress = ProgressSet::new();
        progress.insert(id(1, 1));
        progress.insert(id(1, 2));
        progress.insert(id(1, 3));
        assert!((progress.fraction() - 3.0 / 30.0).abs() < f32::EPSILON);
    }
}
