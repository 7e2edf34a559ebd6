use super::*;
use crate::model::{SUBS_PER_LEVEL, SublevelId};
use crate::app::session::StartOutcome;
use log::{info, warn};

impl QuestApp {
    pub fn ir_a_segunda_pagina(&mut self) {
        self.screen = Screen::SecondPage;
        self.message.clear();
    }

    /// Mecánicas: accesible desde casi todas las pantallas; siempre se
    /// vuelve a la segunda página.
    pub fn abrir_mecanicas(&mut self) {
        self.mechanics_page = 0;
        self.screen = Screen::Mechanics;
    }

    pub fn volver_de_mecanicas(&mut self) {
        self.screen = Screen::SecondPage;
    }

    pub fn abrir_seleccion_ejercicios(&mut self) {
        self.screen = Screen::Select;
        self.message.clear();
    }

    pub fn abrir_ejercicio(&mut self, level: u8) {
        if self.bank.exercise(level).is_none() {
            // Tecla de nivel sin contenido: no-op.
            warn!("No hay ejercicio para el nivel {level}");
            return;
        }
        self.exercise = ExerciseState::for_level(level);
        self.screen = Screen::ExerciseLevel;
        let background = self.bank.music.background.clone();
        self.audio.play_looped(&background);
    }

    /// Entrada al mapa desde la segunda página: la primera vez pasa por
    /// la intro narrada; después va directo al mapa interactivo.
    pub fn abrir_mapa(&mut self) {
        if self.intro_seen {
            self.screen = Screen::MapImage;
        } else {
            self.empezar_intro();
        }
    }

    fn empezar_intro(&mut self) {
        self.intro_page = 0;
        self.screen = Screen::Intro;
        self.reproducir_voz_de_intro();
    }

    fn reproducir_voz_de_intro(&mut self) {
        let track = self
            .bank
            .intro_pages
            .get(self.intro_page)
            .and_then(|p| p.audio.clone());
        if let Some(track) = track {
            self.audio.play_voice_over(&track);
        }
    }

    /// Pasa de página en la intro; tras la última llega la presentación
    /// del mapa.
    pub fn avanzar_intro(&mut self) {
        self.intro_page += 1;
        if self.intro_page >= self.bank.intro_pages.len() {
            self.intro_seen = true;
            self.empezar_presentacion_mapa();
        } else {
            self.reproducir_voz_de_intro();
        }
    }

    fn empezar_presentacion_mapa(&mut self) {
        self.screen = Screen::Map;
        let track = self.bank.map.presentation_audio.clone();
        if let Some(track) = track {
            self.audio.play_voice_over(&track);
        }
    }

    /// Del mapa de presentación al mapa interactivo.
    pub fn continuar_al_mapa(&mut self) {
        self.screen = Screen::MapImage;
        let background = self.bank.music.background.clone();
        self.audio.play_looped(&background);
    }

    pub fn abrir_menu(&mut self) {
        self.screen = Screen::Menu;
    }

    /// "Partida nueva": página de bienvenida narrada y de ahí al 1.1.
    pub fn empezar_nueva_partida(&mut self) {
        self.screen = Screen::IntroNewGame;
        let track = self.bank.new_game.audio.clone();
        if let Some(track) = track {
            self.audio.play_voice_over(&track);
        }
    }

    pub fn abrir_seleccion_subnivel(&mut self, level: u8) {
        let has_content = (1..=SUBS_PER_LEVEL).any(|sub| {
            SublevelId::new(level, sub)
                .map(|id| self.bank.questions_for(id).is_some())
                .unwrap_or(false)
        });
        if !has_content {
            // Dígito sin contenido detrás: la pantalla no cambia.
            warn!("El nivel {level} no tiene subniveles en el banco");
            return;
        }
        self.selected_level = level;
        self.screen = Screen::SublevelSelection;
        self.message.clear();
    }

    /// Arranca la sesión de quiz de un subnivel del nivel elegido.
    pub fn empezar_subnivel(&mut self, sub: u8) {
        let Some(id) = SublevelId::new(self.selected_level, sub) else {
            return;
        };
        self.empezar_subnivel_id(id);
    }

    pub fn empezar_subnivel_id(&mut self, id: SublevelId) {
        match QuizSession::start(&self.bank, id) {
            StartOutcome::Started(session) => {
                self.selected_level = id.level;
                self.session = Some(session);
                self.pending_outcome = None;
                self.reward = None;
                self.screen = Screen::LevelQuestion;
                self.message.clear();
                self.play_current_question_audio();
            }
            StartOutcome::Empty => {
                // Subnivel sin preguntas: se avisa y no se toca el
                // progreso ni la pantalla.
                self.message = format!("El subnivel {id} todavía no tiene preguntas");
            }
        }
    }

    /// Abandona la sesión en curso (si la hay) y vuelve al mapa.
    pub fn volver_al_mapa(&mut self) {
        self.session = None;
        self.pending_outcome = None;
        self.reward = None;
        self.screen = Screen::MapImage;
        let background = self.bank.music.background.clone();
        self.audio.play_looped(&background);
    }

    pub fn abrir_slideshow(&mut self, number: u8) {
        if self.bank.slideshow(number).is_none() {
            warn!("No hay fotos de historia para el nivel {number}");
            return;
        }
        self.slideshow_level = number;
        self.slideshow_index = 0;
        self.screen = Screen::Slideshow;
        info!("Modo historia: nivel {number}");
    }

    pub fn pasar_foto(&mut self, delta: isize) {
        let count = self
            .bank
            .slideshow(self.slideshow_level)
            .map(|s| s.photos.len())
            .unwrap_or(0);
        if count > 1 {
            let current = self.slideshow_index as isize;
            self.slideshow_index = (current + delta).rem_euclid(count as isize) as usize;
        }
    }

    pub fn pasar_pagina_mecanicas(&mut self, delta: isize) {
        let count = self.bank.mechanics_pages.len();
        if count > 1 {
            let current = self.mechanics_page as isize;
            self.mechanics_page = (current + delta).rem_euclid(count as isize) as usize;
        }
    }

    /// Cierra la pantalla de recompensa: siguiente pregunta, estrellas
    /// por puntuación perfecta, o la secuencia de misión cumplida.
    pub fn continuar_tras_recompensa(&mut self) {
        let dismissed = self.reward.take();
        let finished = self.session.as_ref().map(|s| s.finished()).unwrap_or(false);
        if !finished {
            self.screen = Screen::LevelQuestion;
            self.play_current_question_audio();
            return;
        }
        let perfect = self.session.as_ref().map(|s| s.is_perfect()).unwrap_or(false);
        if perfect && dismissed != Some(RewardKind::Stars) {
            self.mostrar_recompensa(RewardKind::Stars);
            return;
        }
        self.empezar_mision();
    }

    pub fn mostrar_recompensa(&mut self, reward: RewardKind) {
        self.reward = Some(reward);
        self.screen = Screen::LevelReward;
        self.play_reward_audio(reward);
    }

    /// Arranca la celebración según el resultado aplazado.
    pub fn empezar_mision(&mut self) {
        let outcome = self.pending_outcome.take().unwrap_or(Outcome::SublevelComplete);
        info!(
            "Subnivel terminado: {}",
            match outcome {
                Outcome::LevelComplete => "nivel completo",
                Outcome::SublevelComplete => "subnivel completo",
            }
        );
        self.mission = Some(MissionSequence::new(outcome));
        self.session = None;
        self.screen = Screen::MissionComplete;
    }

    pub fn avanzar_mision(&mut self) {
        let keep_going = match &mut self.mission {
            Some(mission) => mission.advance(),
            None => false,
        };
        if !keep_going {
            self.mission = None;
            self.volver_al_mapa();
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.viewport_requests
            .push(ViewportRequest::Fullscreen(self.fullscreen));
    }

    pub fn on_resize(&mut self, size: egui::Vec2) {
        self.layout.resize(size);
        // El lienzo de dibujo no sobrevive al cambio de tamaño.
        self.exercise.clear_drawing();
        info!(
            "Ventana redimensionada a {}x{}",
            self.layout.width, self.layout.height
        );
    }
}
