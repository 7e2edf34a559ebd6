use super::progress::ProgressSet;
use crate::data::ContentBank;
use crate::model::{AnswerKind, Feedback, Outcome, Question, SublevelId};
use log::info;

/// Caracteres admitidos en la entrada de texto: cifras, letras y los
/// símbolos básicos de aritmética. Nada más se valida.
pub fn is_allowed_text_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '*' | '/' | '=' | '.')
}

/// Resultado de arrancar un subnivel.
#[derive(Debug)]
pub enum StartOutcome {
    Started(QuizSession),
    /// El banco no trae preguntas para este subnivel: se registra y el
    /// subnivel NO cuenta como completado.
    Empty,
}

/// Qué produjo una respuesta: feedback inmediato y, si con ella se
/// consumió la última pregunta, la secuencia de celebración que toca.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitResult {
    pub feedback: Feedback,
    pub outcome: Option<Outcome>,
}

/// Una pasada en vivo por las preguntas de un subnivel. Se crea en
/// `start` y se reemplaza en el siguiente `start` o al volver al mapa.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub sublevel: SublevelId,
    questions: Vec<Question>,
    index: usize,
    correct: usize,
    /// Buffer de la pregunta de texto activa; None = sin entrada abierta.
    pub text_entry: Option<String>,
    completed: bool,
}

impl QuizSession {
    /// Materializa las preguntas del banco. Un subnivel vacío no crea
    /// sesión: jamás toma el camino de "todas consumidas".
    pub fn start(bank: &ContentBank, sublevel: SublevelId) -> StartOutcome {
        let questions = bank.questions_for(sublevel).unwrap_or(&[]);
        if questions.is_empty() {
            info!("No hay preguntas para el subnivel {sublevel}");
            return StartOutcome::Empty;
        }
        info!(
            "Subnivel {sublevel}: {} preguntas cargadas",
            questions.len()
        );
        StartOutcome::Started(Self {
            sublevel,
            questions: questions.to_vec(),
            index: 0,
            correct: 0,
            text_entry: None,
            completed: false,
        })
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    pub fn finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Puntuación perfecta: tantas correctas como preguntas (las
    /// escenas narrativas no suman, así que solo pasa sin escenarios).
    pub fn is_perfect(&self) -> bool {
        self.correct == self.questions.len()
    }

    /// Respuesta de opción múltiple (1..=4). En un escenario cualquier
    /// envío avanza sin juzgar; en una pregunta de texto es un no-op.
    pub fn submit_choice(
        &mut self,
        option: u8,
        progress: &mut ProgressSet,
    ) -> Option<SubmitResult> {
        let question = self.current()?;
        match question.answer {
            AnswerKind::Scenario => Some(SubmitResult {
                feedback: Feedback::Advanced,
                outcome: self.advance(progress),
            }),
            AnswerKind::Choice { correct } => {
                if option == correct {
                    self.correct += 1;
                    Some(SubmitResult {
                        feedback: Feedback::Correct,
                        outcome: self.advance(progress),
                    })
                } else {
                    // Se repite la misma pregunta tras la recompensa.
                    Some(SubmitResult {
                        feedback: Feedback::Wrong,
                        outcome: None,
                    })
                }
            }
            AnswerKind::Text { .. } => None,
        }
    }

    /// Respuesta escrita: recortada y sin distinguir mayúsculas. Si
    /// falla, la pregunta se repite y el buffer se vacía.
    pub fn submit_text(
        &mut self,
        value: &str,
        progress: &mut ProgressSet,
    ) -> Option<SubmitResult> {
        let question = self.current()?;
        let AnswerKind::Text { expected } = &question.answer else {
            return None;
        };
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if value.eq_ignore_ascii_case(expected.trim()) {
            self.correct += 1;
            self.text_entry = None;
            Some(SubmitResult {
                feedback: Feedback::Correct,
                outcome: self.advance(progress),
            })
        } else {
            if let Some(entry) = &mut self.text_entry {
                entry.clear();
            }
            Some(SubmitResult {
                feedback: Feedback::Wrong,
                outcome: None,
            })
        }
    }

    /// Avance explícito en un escenario (espacio o click).
    pub fn proceed_scenario(&mut self, progress: &mut ProgressSet) -> Option<SubmitResult> {
        let question = self.current()?;
        if !question.is_scenario() {
            return None;
        }
        Some(SubmitResult {
            feedback: Feedback::Advanced,
            outcome: self.advance(progress),
        })
    }

    // --- Entrada de texto -------------------------------------------------

    pub fn text_entry_active(&self) -> bool {
        self.text_entry.is_some()
    }

    pub fn open_text_entry(&mut self) {
        if self.current().map(|q| q.needs_text_input()).unwrap_or(false) {
            self.text_entry = Some(String::new());
        }
    }

    pub fn close_text_entry(&mut self) {
        self.text_entry = None;
    }

    pub fn push_text_char(&mut self, c: char) {
        if !is_allowed_text_char(c) {
            return;
        }
        if let Some(entry) = &mut self.text_entry {
            entry.push(c);
        }
    }

    pub fn pop_text_char(&mut self) {
        if let Some(entry) = &mut self.text_entry {
            entry.pop();
        }
    }

    /// Consume una pregunta; al consumir la última, apunta el subnivel
    /// en el progreso y decide qué secuencia de celebración emitir. El
    /// índice nunca retrocede y la finalización solo dispara una vez.
    fn advance(&mut self, progress: &mut ProgressSet) -> Option<Outcome> {
        self.index += 1;
        if self.index < self.questions.len() || self.completed {
            return None;
        }
        self.completed = true;
        let was_complete = progress.is_level_complete(self.sublevel.level);
        progress.insert(self.sublevel);
        let now_complete = progress.is_level_complete(self.sublevel.level);
        if now_complete && !was_complete {
            Some(Outcome::LevelComplete)
        } else {
            Some(Outcome::SublevelComplete)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SUBS_PER_LEVEL;

    fn question(answer: AnswerKind) -> Question {
        Question {
            image: "photos/test.png".into(),
            answer,
            audio: None,
        }
    }

    fn session(sublevel: &str, answers: Vec<AnswerKind>) -> QuizSession {
        QuizSession {
            sublevel: sublevel.parse().unwrap(),
            questions: answers.into_iter().map(question).collect(),
            index: 0,
            correct: 0,
            text_entry: None,
            completed: false,
        }
    }

    #[test]
    fn wrong_choice_repeats_until_correct() {
        let mut progress = ProgressSet::new();
        let mut s = session(
            "2.1",
            vec![
                AnswerKind::Choice { correct: 3 },
                AnswerKind::Scenario,
            ],
        );

        for option in [1, 2, 4] {
            let r = s.submit_choice(option, &mut progress).unwrap();
            assert_eq!(r.feedback, Feedback::Wrong);
            assert_eq!(s.index(), 0);
        }
        let r = s.submit_choice(3, &mut progress).unwrap();
        assert_eq!(r.feedback, Feedback::Correct);
        assert_eq!(s.index(), 1);
        assert_eq!(s.correct_count(), 1);
    }

    #[test]
    fn scenario_always_advances_without_judgement() {
        let mut progress = ProgressSet::new();
        let mut s = session("2.2", vec![AnswerKind::Scenario, AnswerKind::Scenario]);

        let r = s.submit_choice(4, &mut progress).unwrap();
        assert_eq!(r.feedback, Feedback::Advanced);
        assert_eq!(s.correct_count(), 0);

        let r = s.proceed_scenario(&mut progress).unwrap();
        assert_eq!(r.feedback, Feedback::Advanced);
        assert!(s.finished());
        assert_eq!(s.correct_count(), 0);
    }

    #[test]
    fn text_answers_trim_and_ignore_case() {
        let mut progress = ProgressSet::new();
        let mut s = session(
            "3.1",
            vec![AnswerKind::Text {
                expected: "9".into(),
            }],
        );
        s.open_text_entry();

        let r = s.submit_text("B", &mut progress).unwrap();
        assert_eq!(r.feedback, Feedback::Wrong);
        assert_eq!(s.index(), 0);
        // El fallo vacía el buffer pendiente.
        assert_eq!(s.text_entry.as_deref(), Some(""));

        let r = s.submit_text(" 9 ", &mut progress).unwrap();
        assert_eq!(r.feedback, Feedback::Correct);
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn text_comparison_keeps_internal_whitespace() {
        let mut progress = ProgressSet::new();
        let mut s = session(
            "3.2",
            vec![AnswerKind::Text {
                expected: "dos tres".into(),
            }],
        );
        let r = s.submit_text("dostres", &mut progress).unwrap();
        assert_eq!(r.feedback, Feedback::Wrong);
        let r = s.submit_text(" DOS TRES ", &mut progress).unwrap();
        assert_eq!(r.feedback, Feedback::Correct);
    }

    #[test]
    fn text_entry_filters_characters() {
        let mut s = session(
            "3.3",
            vec![AnswerKind::Text {
                expected: "3+4".into(),
            }],
        );
        s.open_text_entry();
        for c in ['3', '+', '4', '!', ' ', '€'] {
            s.push_text_char(c);
        }
        assert_eq!(s.text_entry.as_deref(), Some("3+4"));
        s.pop_text_char();
        assert_eq!(s.text_entry.as_deref(), Some("3+"));
    }

    #[test]
    fn finishing_a_sublevel_records_progress_once() {
        let mut progress = ProgressSet::new();
        let mut s = session("5.2", vec![AnswerKind::Scenario]);
        let r = s.proceed_scenario(&mut progress).unwrap();
        assert_eq!(r.outcome, Some(Outcome::SublevelComplete));
        assert!(progress.contains("5.2".parse().unwrap()));
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn third_sublevel_of_a_level_emits_level_complete_once() {
        let mut progress = ProgressSet::new();
        for sub in 1..SUBS_PER_LEVEL {
            let id = format!("6.{sub}");
            let mut s = session(&id, vec![AnswerKind::Scenario]);
            let r = s.proceed_scenario(&mut progress).unwrap();
            assert_eq!(r.outcome, Some(Outcome::SublevelComplete));
        }

        let mut s = session("6.3", vec![AnswerKind::Scenario]);
        let r = s.proceed_scenario(&mut progress).unwrap();
        assert_eq!(r.outcome, Some(Outcome::LevelComplete));

        // Rejugar un subnivel ya completado nunca repite la secuencia
        // de nivel completo.
        let mut s = session("6.1", vec![AnswerKind::Scenario]);
        let r = s.proceed_scenario(&mut progress).unwrap();
        assert_eq!(r.outcome, Some(Outcome::SublevelComplete));
        assert_eq!(progress.completed_count(), 3);
    }

    #[test]
    fn end_to_end_sublevel_run() {
        // Guion de ejemplo: opción múltiple (correcta 2), texto "9",
        // escenario final.
        let mut progress = ProgressSet::new();
        let mut s = session(
            "1.1",
            vec![
                AnswerKind::Choice { correct: 2 },
                AnswerKind::Text {
                    expected: "9".into(),
                },
                AnswerKind::Scenario,
            ],
        );

        let r = s.submit_choice(1, &mut progress).unwrap();
        assert_eq!((r.feedback, s.index()), (Feedback::Wrong, 0));

        let r = s.submit_choice(2, &mut progress).unwrap();
        assert_eq!((r.feedback, s.index(), s.correct_count()), (Feedback::Correct, 1, 1));

        let r = s.submit_text("nine", &mut progress).unwrap();
        assert_eq!((r.feedback, s.index()), (Feedback::Wrong, 1));

        let r = s.submit_text("9", &mut progress).unwrap();
        assert_eq!((r.feedback, s.index(), s.correct_count()), (Feedback::Correct, 2, 2));

        let r = s.proceed_scenario(&mut progress).unwrap();
        assert_eq!(s.index(), 3);
        assert!(progress.contains("1.1".parse().unwrap()));
        assert!(!progress.is_level_complete(1));
        assert_eq!(r.outcome, Some(Outcome::SublevelComplete));
    }

    #[test]
    fn empty_sublevel_never_starts_a_session() {
        let mut bank = crate::data::read_content_embedded();
        bank.sublevels.retain(|s| s.id.to_string() != "9.3");
        match QuizSession::start(&bank, "9.3".parse().unwrap()) {
            StartOutcome::Empty => {}
            StartOutcome::Started(_) => panic!("un subnivel vacío no debe arrancar"),
        }
    }
}
