use super::*;
use crate::app::session::{SubmitResult, is_allowed_text_char};
use crate::model::Feedback;
use egui::{Key, Vec2};

/// Evento de entrada ya traducido desde egui. El navegador consume
/// exactamente uno por llamada y produce como mucho una transición.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Key(Key),
    /// Carácter literal, solo relevante con una entrada de texto abierta.
    Char(char),
    PointerDown(Pos2),
    PointerMoved(Pos2),
    PointerUp,
    Resized(Vec2),
    Quit,
}

/// Dígitos 1..9 y 0 como nivel 10.
fn level_digit(key: Key) -> Option<u8> {
    match key {
        Key::Num1 => Some(1),
        Key::Num2 => Some(2),
        Key::Num3 => Some(3),
        Key::Num4 => Some(4),
        Key::Num5 => Some(5),
        Key::Num6 => Some(6),
        Key::Num7 => Some(7),
        Key::Num8 => Some(8),
        Key::Num9 => Some(9),
        Key::Num0 => Some(10),
        _ => None,
    }
}

/// Opciones de respuesta A..D.
fn choice_digit(key: Key) -> Option<u8> {
    match key {
        Key::Num1 => Some(1),
        Key::Num2 => Some(2),
        Key::Num3 => Some(3),
        Key::Num4 => Some(4),
        _ => None,
    }
}

impl QuestApp {
    /// Punto único de entrada del navegador. Devuelve false cuando hay
    /// que cerrar el proceso.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit => return false,
            // F11 alterna pantalla completa sin cambiar de pantalla.
            InputEvent::Key(Key::F11) => {
                self.toggle_fullscreen();
                return true;
            }
            InputEvent::Resized(size) => {
                self.on_resize(size);
                return true;
            }
            _ => {}
        }

        match self.screen {
            Screen::Splash => self.on_splash(event),
            Screen::SecondPage => self.on_second_page(event),
            Screen::Select => self.on_select(event),
            Screen::ExerciseLevel => self.on_exercise_level(event),
            Screen::Intro => self.on_intro(event),
            Screen::Map => self.on_map(event),
            Screen::MapImage => self.on_map_image(event),
            Screen::SublevelSelection => self.on_sublevel_selection(event),
            Screen::LevelQuestion => self.on_level_question(event),
            Screen::LevelReward => self.on_level_reward(event),
            Screen::MissionComplete => self.on_mission_complete(event),
            Screen::Mechanics => self.on_mechanics(event),
            Screen::Menu => self.on_menu(event),
            Screen::Slideshow => self.on_slideshow(event),
            Screen::IntroNewGame => self.on_intro_new_game(event),
        }
    }

    /// ¿Cae el click en una de las zonas que abren las mecánicas?
    fn mechanics_hit(&self, pos: Pos2) -> bool {
        self.regions.hit(RegionId::GearIcon, pos)
            || self.regions.hit(RegionId::MechanicsCorner, pos)
    }

    // --- Manejadores por pantalla ----------------------------------------

    fn on_splash(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => return false,
            InputEvent::Key(_) => self.ir_a_segunda_pagina(),
            InputEvent::PointerDown(pos) => {
                if self.mechanics_hit(pos) {
                    self.abrir_mecanicas();
                } else {
                    self.ir_a_segunda_pagina();
                }
            }
            _ => {}
        }
        true
    }

    fn on_second_page(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => return false,
            InputEvent::Key(Key::Num1) => self.abrir_seleccion_ejercicios(),
            InputEvent::Key(Key::Num2) => self.abrir_mapa(),
            InputEvent::Key(Key::Num3) => self.empezar_nueva_partida(),
            InputEvent::Key(Key::M) => self.abrir_menu(),
            InputEvent::PointerDown(pos) => {
                if self.mechanics_hit(pos) {
                    self.abrir_mecanicas();
                } else {
                    self.screen = Screen::MapImage;
                }
            }
            _ => {}
        }
        true
    }

    fn on_select(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => self.ir_a_segunda_pagina(),
            InputEvent::Key(key) => {
                if let Some(level) = level_digit(key) {
                    self.abrir_ejercicio(level);
                }
            }
            InputEvent::PointerDown(pos) => {
                if self.mechanics_hit(pos) {
                    self.abrir_mecanicas();
                } else {
                    self.ir_a_segunda_pagina();
                }
            }
            _ => {}
        }
        true
    }

    fn on_exercise_level(&mut self, event: InputEvent) -> bool {
        if self.exercise.entry.is_some() {
            return self.on_exercise_entry(event);
        }
        match event {
            InputEvent::Key(Key::Escape) => self.abrir_seleccion_ejercicios(),
            InputEvent::Key(Key::C) => self.exercise.clear_drawing(),
            InputEvent::Key(Key::Space) => {
                if self.exercise.next_slot().is_some() {
                    self.exercise.entry = Some(String::new());
                }
            }
            // 1-5 cambian el color del trazo.
            InputEvent::Key(Key::Num1) => self.exercise.color_index = 0,
            InputEvent::Key(Key::Num2) => self.exercise.color_index = 1,
            InputEvent::Key(Key::Num3) => self.exercise.color_index = 2,
            InputEvent::Key(Key::Num4) => self.exercise.color_index = 3,
            InputEvent::Key(Key::Num5) => self.exercise.color_index = 4,
            InputEvent::PointerDown(pos) => {
                if self.mechanics_hit(pos) {
                    self.abrir_mecanicas();
                } else if self.regions.hit(RegionId::Artwork, pos) {
                    self.exercise.current_stroke = Some(Stroke {
                        color: self.exercise.color_index,
                        points: vec![pos],
                    });
                }
            }
            InputEvent::PointerMoved(pos) => {
                let inside = self.regions.hit(RegionId::Artwork, pos);
                if let Some(stroke) = &mut self.exercise.current_stroke {
                    if inside {
                        stroke.points.push(pos);
                    }
                }
            }
            InputEvent::PointerUp => {
                if let Some(stroke) = self.exercise.current_stroke.take() {
                    if stroke.points.len() > 1 {
                        self.exercise.strokes.push(stroke);
                    }
                }
            }
            _ => {}
        }
        true
    }

    /// Entrada de texto de un hueco de respuesta del ejercicio.
    fn on_exercise_entry(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => self.exercise.entry = None,
            InputEvent::Key(Key::Backspace) => {
                if let Some(entry) = &mut self.exercise.entry {
                    entry.pop();
                }
            }
            InputEvent::Key(Key::Enter) => self.comprobar_hueco_ejercicio(),
            InputEvent::Char(c) => {
                if is_allowed_text_char(c) {
                    if let Some(entry) = &mut self.exercise.entry {
                        entry.push(c);
                    }
                }
            }
            _ => {}
        }
        true
    }

    fn comprobar_hueco_ejercicio(&mut self) {
        let Some(slot) = self.exercise.next_slot() else {
            self.exercise.entry = None;
            return;
        };
        let value = self.exercise.entry.clone().unwrap_or_default();
        if value.trim().is_empty() {
            return;
        }
        let matched = self
            .bank
            .exercise(self.exercise.level)
            .map(|key| key.matches(slot, &value))
            .unwrap_or(false);
        if matched {
            self.exercise.solved[slot] = true;
            self.exercise.entry = None;
            let track = self.bank.music.correct.clone();
            self.audio.play(&track);
            self.message = if self.exercise.all_solved() {
                "¡Ejercicio completado!".to_owned()
            } else {
                String::new()
            };
        } else {
            // Fallo: el hueco se repite con el buffer vacío.
            if let Some(entry) = &mut self.exercise.entry {
                entry.clear();
            }
            let track = self.bank.music.wrong.clone();
            self.audio.play(&track);
        }
    }

    fn on_intro(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => return false,
            InputEvent::Key(_) | InputEvent::PointerDown(_) => self.avanzar_intro(),
            _ => {}
        }
        true
    }

    fn on_map(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => return false,
            InputEvent::Key(Key::Num1) => self.abrir_slideshow(1),
            InputEvent::Key(Key::Num2) => self.abrir_slideshow(2),
            InputEvent::Key(Key::Num3) => self.abrir_slideshow(3),
            InputEvent::Key(Key::Space) | InputEvent::Key(Key::Enter) => self.continuar_al_mapa(),
            InputEvent::PointerDown(_) => self.continuar_al_mapa(),
            _ => {}
        }
        true
    }

    fn on_map_image(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => self.ir_a_segunda_pagina(),
            InputEvent::Key(key) => {
                if let Some(level) = level_digit(key) {
                    self.abrir_seleccion_subnivel(level);
                }
            }
            InputEvent::PointerDown(pos) => {
                if self.mechanics_hit(pos) {
                    self.abrir_mecanicas();
                } else {
                    self.ir_a_segunda_pagina();
                }
            }
            _ => {}
        }
        true
    }

    fn on_sublevel_selection(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => self.screen = Screen::MapImage,
            InputEvent::Key(Key::Num1) => self.empezar_subnivel(1),
            InputEvent::Key(Key::Num2) => self.empezar_subnivel(2),
            InputEvent::Key(Key::Num3) => self.empezar_subnivel(3),
            InputEvent::PointerDown(pos) => {
                if self.mechanics_hit(pos) {
                    self.abrir_mecanicas();
                } else {
                    self.screen = Screen::MapImage;
                }
            }
            _ => {}
        }
        true
    }

    fn on_level_question(&mut self, event: InputEvent) -> bool {
        if self.session.is_none() {
            // Sin sesión viva no hay pregunta que mostrar.
            self.volver_al_mapa();
            return true;
        }
        let entry_active = self
            .session
            .as_ref()
            .map(|s| s.text_entry_active())
            .unwrap_or(false);
        if entry_active {
            return self.on_question_entry(event);
        }

        match event {
            InputEvent::Key(Key::Escape) => self.volver_al_mapa(),
            InputEvent::Key(Key::Space) => {
                let (needs_text, is_scenario) = self.current_question_shape();
                if needs_text {
                    if let Some(session) = &mut self.session {
                        session.open_text_entry();
                    }
                } else if is_scenario {
                    let result = match &mut self.session {
                        Some(s) => s.proceed_scenario(&mut self.progress),
                        None => None,
                    };
                    self.aplicar_resultado(result);
                }
            }
            InputEvent::Key(key) => {
                if let Some(option) = choice_digit(key) {
                    let result = match &mut self.session {
                        Some(s) => s.submit_choice(option, &mut self.progress),
                        None => None,
                    };
                    self.aplicar_resultado(result);
                }
            }
            InputEvent::PointerDown(_) => {
                let (needs_text, is_scenario) = self.current_question_shape();
                if needs_text {
                    if let Some(session) = &mut self.session {
                        session.open_text_entry();
                    }
                } else if is_scenario {
                    let result = match &mut self.session {
                        Some(s) => s.proceed_scenario(&mut self.progress),
                        None => None,
                    };
                    self.aplicar_resultado(result);
                } else {
                    self.volver_al_mapa();
                }
            }
            _ => {}
        }
        true
    }

    /// Entrada de texto de una pregunta de problema.
    fn on_question_entry(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => {
                if let Some(session) = &mut self.session {
                    session.close_text_entry();
                }
            }
            InputEvent::Key(Key::Backspace) => {
                if let Some(session) = &mut self.session {
                    session.pop_text_char();
                }
            }
            InputEvent::Key(Key::Enter) => {
                let value = self
                    .session
                    .as_ref()
                    .and_then(|s| s.text_entry.clone())
                    .unwrap_or_default();
                let result = match &mut self.session {
                    Some(s) => s.submit_text(&value, &mut self.progress),
                    None => None,
                };
                self.aplicar_resultado(result);
            }
            InputEvent::Char(c) => {
                if let Some(session) = &mut self.session {
                    session.push_text_char(c);
                }
            }
            _ => {}
        }
        true
    }

    fn on_level_reward(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Space)
            | InputEvent::Key(Key::Escape)
            | InputEvent::PointerDown(_) => self.continuar_tras_recompensa(),
            _ => {}
        }
        true
    }

    fn on_mission_complete(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(_) | InputEvent::PointerDown(_) => self.avanzar_mision(),
            _ => {}
        }
        true
    }

    fn on_mechanics(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => self.volver_de_mecanicas(),
            InputEvent::Key(Key::ArrowLeft) => self.pasar_pagina_mecanicas(-1),
            InputEvent::Key(Key::ArrowRight) => self.pasar_pagina_mecanicas(1),
            InputEvent::PointerDown(_) => self.volver_de_mecanicas(),
            _ => {}
        }
        true
    }

    fn on_menu(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => return false,
            InputEvent::Key(_) | InputEvent::PointerDown(_) => self.ir_a_segunda_pagina(),
            _ => {}
        }
        true
    }

    fn on_slideshow(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(Key::Escape) => self.ir_a_segunda_pagina(),
            InputEvent::Key(Key::ArrowLeft) | InputEvent::Key(Key::Backspace) => {
                self.pasar_foto(-1)
            }
            InputEvent::Key(Key::ArrowRight) | InputEvent::Key(Key::Space) => self.pasar_foto(1),
            InputEvent::PointerDown(_) => self.ir_a_segunda_pagina(),
            _ => {}
        }
        true
    }

    fn on_intro_new_game(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(_) | InputEvent::PointerDown(_) => {
                if let Some(id) = crate::model::SublevelId::new(1, 1) {
                    self.empezar_subnivel_id(id);
                }
            }
            _ => {}
        }
        true
    }

    // --- Ayudas -----------------------------------------------------------

    fn current_question_shape(&self) -> (bool, bool) {
        self.session
            .as_ref()
            .and_then(|s| s.current())
            .map(|q| (q.needs_text_input(), q.is_scenario()))
            .unwrap_or((false, false))
    }

    /// Traduce el resultado de una respuesta en recompensa, siguiente
    /// pregunta o celebración.
    fn aplicar_resultado(&mut self, result: Option<SubmitResult>) {
        let Some(result) = result else { return };
        if let Some(outcome) = result.outcome {
            self.pending_outcome = Some(outcome);
        }
        match result.feedback {
            Feedback::Correct => self.mostrar_recompensa(RewardKind::Correct),
            Feedback::Wrong => self.mostrar_recompensa(RewardKind::Wrong),
            Feedback::Advanced => {
                let finished = self.session.as_ref().map(|s| s.finished()).unwrap_or(false);
                if !finished {
                    self.play_current_question_audio();
                    return;
                }
                // El escenario final no tiene recompensa propia.
                let perfect = self
                    .session
                    .as_ref()
                    .map(|s| s.is_perfect())
                    .unwrap_or(false);
                if perfect {
                    self.mostrar_recompensa(RewardKind::Stars);
                } else {
                    self.empezar_mision();
                }
            }
        }
    }
}
