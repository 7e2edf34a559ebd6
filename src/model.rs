use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Niveles principales del mapa (fijo: 10 niveles × 3 subniveles).
pub const TOTAL_LEVELS: u8 = 10;
pub const SUBS_PER_LEVEL: u8 = 3;

/// Pantalla actual de la app. Solo el navegador la muta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Splash,
    SecondPage,
    Select,
    ExerciseLevel,
    Intro,
    Map,
    MapImage,
    SublevelSelection,
    LevelQuestion,
    LevelReward,
    MissionComplete,
    Mechanics,
    Menu,
    Slideshow,
    IntroNewGame,
}

/// Identificador de subnivel: "3.2" = nivel 3, subnivel 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SublevelId {
    pub level: u8,
    pub sub: u8,
}

impl SublevelId {
    pub fn new(level: u8, sub: u8) -> Option<Self> {
        if (1..=TOTAL_LEVELS).contains(&level) && (1..=SUBS_PER_LEVEL).contains(&sub) {
            Some(Self { level, sub })
        } else {
            None
        }
    }
}

impl fmt::Display for SublevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.level, self.sub)
    }
}

impl FromStr for SublevelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lvl, sub) = s
            .split_once('.')
            .ok_or_else(|| format!("id de subnivel sin punto: {s:?}"))?;
        let level: u8 = lvl.parse().map_err(|_| format!("nivel inválido en {s:?}"))?;
        let sub: u8 = sub.parse().map_err(|_| format!("subnivel inválido en {s:?}"))?;
        SublevelId::new(level, sub).ok_or_else(|| format!("fuera de rango: {s:?}"))
    }
}

impl TryFrom<String> for SublevelId {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SublevelId> for String {
    fn from(id: SublevelId) -> String {
        id.to_string()
    }
}

/// Cómo se responde una pregunta.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerKind {
    /// Opción múltiple, respuesta correcta 1..=4 (A=1 .. D=4).
    Choice { correct: u8 },
    /// Respuesta escrita; se compara sin mayúsculas y sin espacios exteriores.
    Text { expected: String },
    /// Imagen narrativa: no se responde, solo se avanza.
    Scenario,
}

/// Una pregunta de un subnivel, tal y como viene del banco embebido.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub image: String,
    #[serde(flatten)]
    pub answer: AnswerKind,
    #[serde(default)]
    pub audio: Option<String>,
}

impl Question {
    pub fn is_scenario(&self) -> bool {
        matches!(self.answer, AnswerKind::Scenario)
    }

    pub fn needs_text_input(&self) -> bool {
        matches!(self.answer, AnswerKind::Text { .. })
    }
}

/// Resultado inmediato de una respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
    /// Escenario: se avanza sin juzgar.
    Advanced,
}

/// Qué secuencia de celebración toca al terminar un subnivel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    SublevelComplete,
    LevelComplete,
}

/// Arte/sonido de la pantalla de recompensa por pregunta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardKind {
    Correct,
    Wrong,
    Stars,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    Sublevel,
    Level,
}

/// Estado efímero de la secuencia "misión cumplida".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissionSequence {
    pub kind: SequenceKind,
    pub step: usize,
}

impl MissionSequence {
    pub fn new(outcome: Outcome) -> Self {
        let kind = match outcome {
            Outcome::SublevelComplete => SequenceKind::Sublevel,
            Outcome::LevelComplete => SequenceKind::Level,
        };
        Self { kind, step: 0 }
    }

    /// Nº de pasos: estrellas → misión 1 → misión 2 para nivel completo,
    /// un solo arte para subnivel.
    pub fn len(&self) -> usize {
        match self.kind {
            SequenceKind::Sublevel => 1,
            SequenceKind::Level => 3,
        }
    }

    /// Avanza un paso; devuelve false cuando la secuencia terminó.
    pub fn advance(&mut self) -> bool {
        self.step += 1;
        self.step < self.len()
    }
}

/// Respuestas esperadas de un nivel de ejercicios (tres huecos de texto).
/// Solo configuración: nunca se muta en ejecución.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseKey {
    pub level: u8,
    pub image: String,
    pub answers: [String; 3],
}

impl ExerciseKey {
    pub fn matches(&self, slot: usize, input: &str) -> bool {
        self.answers
            .get(slot)
            .map(|expected| input.trim().eq_ignore_ascii_case(expected.trim()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sublevel_id_roundtrip_dotted_string() {
        let id: SublevelId = "1.2".parse().expect("parse ok");
        assert_eq!(id, SublevelId { level: 1, sub: 2 });
        assert_eq!(id.to_string(), "1.2");
    }

    #[test]
    fn sublevel_id_rejects_out_of_range() {
        assert!("0.1".parse::<SublevelId>().is_err());
        assert!("11.1".parse::<SublevelId>().is_err());
        assert!("3.4".parse::<SublevelId>().is_err());
        assert!("3".parse::<SublevelId>().is_err());
        assert!("a.b".parse::<SublevelId>().is_err());
    }

    #[test]
    fn mission_sequence_steps_for_each_kind() {
        let mut sub = MissionSequence::new(Outcome::SublevelComplete);
        assert!(!sub.advance());

        let mut lvl = MissionSequence::new(Outcome::LevelComplete);
        assert!(lvl.advance());
        assert!(lvl.advance());
        assert!(!lvl.advance());
    }

    #[test]
    fn exercise_key_matches_case_insensitive_trimmed() {
        let key = ExerciseKey {
            level: 1,
            image: "photos/exercises/level_1.png".into(),
            answers: ["12".into(), "Seven".into(), "9".into()],
        };
        assert!(key.matches(0, " 12 "));
        assert!(key.matches(1, "seven"));
        assert!(!key.matches(2, "nine"));
        assert!(!key.matches(3, "12"));
    }
}
