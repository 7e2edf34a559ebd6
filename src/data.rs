// src/data.rs

use crate::model::{ExerciseKey, Question, SublevelId};
use serde::{Deserialize, Serialize};

/// Una página de intro narrada (imagen + voz opcional).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroPage {
    pub image: String,
    #[serde(default)]
    pub audio: Option<String>,
}

/// Arte del mapa: base sin progreso y variantes según el nivel
/// completo más alto (variants[0] = nivel 1 completo, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapArt {
    pub base: String,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub presentation_audio: Option<String>,
}

/// Arte de la pantalla de recompensa por pregunta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardArt {
    pub correct: String,
    pub wrong: String,
    pub stars: String,
}

/// Arte de la secuencia "misión cumplida".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionArt {
    /// Un solo arte cuando se termina un subnivel suelto.
    pub sublevel_clear: String,
    /// Estrellas → misión 1 → misión 2 cuando cae el nivel entero.
    pub level_steps: [String; 3],
}

/// Pistas de audio fijas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicPaths {
    pub background: String,
    pub correct: String,
    pub wrong: String,
}

/// Fotos del modo historia (slideshow), declaradas en el banco;
/// no se escanean directorios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowLevel {
    pub number: u8,
    pub photos: Vec<String>,
}

/// Preguntas de un subnivel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SublevelContent {
    pub id: SublevelId,
    pub questions: Vec<Question>,
}

/// Banco de contenido completo, parseado una vez al arrancar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBank {
    pub splash: String,
    pub second_page: String,
    pub select: String,
    pub mechanics_pages: Vec<String>,
    pub intro_pages: Vec<IntroPage>,
    pub new_game: IntroPage,
    pub map: MapArt,
    pub rewards: RewardArt,
    pub mission: MissionArt,
    pub music: MusicPaths,
    pub slideshow_levels: Vec<SlideshowLevel>,
    pub exercises: Vec<ExerciseKey>,
    pub sublevels: Vec<SublevelContent>,
}

impl ContentBank {
    /// Preguntas de un subnivel; None si el banco no lo trae.
    pub fn questions_for(&self, id: SublevelId) -> Option<&[Question]> {
        self.sublevels
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.questions.as_slice())
    }

    pub fn exercise(&self, level: u8) -> Option<&ExerciseKey> {
        self.exercises.iter().find(|e| e.level == level)
    }

    pub fn slideshow(&self, number: u8) -> Option<&SlideshowLevel> {
        self.slideshow_levels.iter().find(|s| s.number == number)
    }

    /// Variante del mapa para el nivel completo más alto (0 = base).
    pub fn map_artifact(&self, highest_level: u8) -> &str {
        if highest_level == 0 {
            return &self.map.base;
        }
        self.map
            .variants
            .get(highest_level as usize - 1)
            .map(String::as_str)
            .unwrap_or(&self.map.base)
    }
}

/// Carga el banco de contenido desde el YAML embebido
pub fn read_content_embedded() -> ContentBank {
    let file_content = include_str!("data/content.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de contenido YAML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerKind, SUBS_PER_LEVEL, TOTAL_LEVELS};

    #[test]
    fn embedded_bank_parses() {
        let bank = read_content_embedded();
        assert!(!bank.sublevels.is_empty());
        assert_eq!(bank.mechanics_pages.len(), 3);
        assert_eq!(bank.intro_pages.len(), 2);
    }

    #[test]
    fn bank_covers_the_whole_map() {
        let bank = read_content_embedded();
        for level in 1..=TOTAL_LEVELS {
            for sub in 1..=SUBS_PER_LEVEL {
                let id = SublevelId::new(level, sub).unwrap();
                let qs = bank
                    .questions_for(id)
                    .unwrap_or_else(|| panic!("falta el subnivel {id}"));
                assert!(!qs.is_empty(), "subnivel {id} sin preguntas");
            }
        }
    }

    #[test]
    fn choice_answers_stay_in_range() {
        let bank = read_content_embedded();
        for sub in &bank.sublevels {
            for q in &sub.questions {
                if let AnswerKind::Choice { correct } = q.answer {
                    assert!(
                        (1..=4).contains(&correct),
                        "{}: opción correcta {correct} fuera de 1..=4",
                        sub.id
                    );
                }
            }
        }
    }

    #[test]
    fn sublevel_ids_are_unique() {
        let bank = read_content_embedded();
        let mut seen = std::collections::HashSet::new();
        for sub in &bank.sublevels {
            assert!(seen.insert(sub.id), "subnivel duplicado: {}", sub.id);
        }
    }

    #[test]
    fn map_artifact_falls_back_to_base() {
        let bank = read_content_embedded();
        assert_eq!(bank.map_artifact(0), bank.map.base);
        // Una variante inexistente no debe romper el mapa.
        assert_eq!(bank.map_artifact(TOTAL_LEVELS), bank.map.base);
    }

    #[test]
    fn exercises_define_three_answers() {
        let bank = read_content_embedded();
        assert!(!bank.exercises.is_empty());
        for ex in &bank.exercises {
            assert!((1..=TOTAL_LEVELS).contains(&ex.level));
            for answer in &ex.answers {
                assert!(!answer.trim().is_empty());
            }
        }
    }
}
