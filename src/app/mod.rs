use crate::assets::AssetStore;
use crate::audio::AudioService;
use crate::data::{ContentBank, read_content_embedded};
use crate::model::{MissionSequence, Outcome, RewardKind, Screen};
use egui::Pos2;

// Submódulos
pub mod input;
pub mod layout;
pub mod navigation;
pub mod progress;
pub mod regions;
pub mod session;

pub use input::InputEvent;
pub use layout::ScreenLayout;
pub use progress::ProgressSet;
pub use regions::{FrameRegions, RegionId};
pub use session::QuizSession;

/// Un trazo del lienzo de ejercicios: índice de color + puntos.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: usize,
    pub points: Vec<Pos2>,
}

/// Estado efímero de la pantalla de ejercicios: dibujo a mano alzada
/// sobre el arte y los tres huecos de respuesta escrita.
#[derive(Clone, Debug, Default)]
pub struct ExerciseState {
    pub level: u8,
    pub solved: [bool; 3],
    /// Buffer de la respuesta en curso; None = sin entrada abierta.
    pub entry: Option<String>,
    pub strokes: Vec<Stroke>,
    pub current_stroke: Option<Stroke>,
    pub color_index: usize,
}

impl ExerciseState {
    pub fn for_level(level: u8) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Primer hueco sin resolver, si queda alguno.
    pub fn next_slot(&self) -> Option<usize> {
        self.solved.iter().position(|done| !done)
    }

    pub fn all_solved(&self) -> bool {
        self.solved.iter().all(|&done| done)
    }

    pub fn clear_drawing(&mut self) {
        self.strokes.clear();
        self.current_stroke = None;
    }
}

/// Petición al runtime de ventana, drenada por la capa de UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportRequest {
    Fullscreen(bool),
}

/// Estado completo de la aplicación: pantalla actual, banco de
/// contenido, progreso y el estado efímero de cada pantalla. Nada de
/// globales: todo vive aquí y lo muta el navegador.
pub struct QuestApp {
    pub screen: Screen,
    pub bank: ContentBank,
    pub progress: ProgressSet,
    pub session: Option<QuizSession>,
    /// Celebración aplazada hasta que se cierre la última recompensa.
    pub pending_outcome: Option<Outcome>,
    pub reward: Option<RewardKind>,
    pub mission: Option<MissionSequence>,

    /// Nivel elegido en el mapa (pantalla de subniveles).
    pub selected_level: u8,
    pub exercise: ExerciseState,
    pub mechanics_page: usize,
    pub intro_page: usize,
    pub intro_seen: bool,
    pub slideshow_level: u8,
    pub slideshow_index: usize,

    /// Mensaje informativo del pie (p. ej. subnivel sin preguntas).
    pub message: String,

    pub layout: ScreenLayout,
    pub regions: FrameRegions,
    pub assets: AssetStore,
    pub audio: AudioService,
    pub fullscreen: bool,
    pub viewport_requests: Vec<ViewportRequest>,
}

impl QuestApp {
    pub fn new() -> Self {
        let mut app = Self::with_services(
            AssetStore::new("assets"),
            AudioService::new("assets"),
        );
        // La música de fondo arranca con la app.
        let background = app.bank.music.background.clone();
        app.audio.play_looped(&background);
        app
    }

    /// Para tests: sin dispositivo de audio ni carga de texturas.
    pub fn new_silent() -> Self {
        Self::with_services(AssetStore::new("assets"), AudioService::disabled("assets"))
    }

    fn with_services(assets: AssetStore, audio: AudioService) -> Self {
        Self {
            screen: Screen::Splash,
            bank: read_content_embedded(),
            progress: ProgressSet::new(),
            session: None,
            pending_outcome: None,
            reward: None,
            mission: None,
            selected_level: 0,
            exercise: ExerciseState::default(),
            mechanics_page: 0,
            intro_page: 0,
            intro_seen: false,
            slideshow_level: 0,
            slideshow_index: 0,
            message: String::new(),
            layout: ScreenLayout::default(),
            regions: FrameRegions::default(),
            assets,
            audio,
            fullscreen: false,
            viewport_requests: Vec::new(),
        }
    }

    /// Audio de la pregunta actual: su pista propia una vez, o la
    /// música de fondo en bucle si no tiene.
    pub fn play_current_question_audio(&mut self) {
        let track = self
            .session
            .as_ref()
            .and_then(|s| s.current())
            .and_then(|q| q.audio.clone());
        match track {
            Some(track) => self.audio.play(&track),
            None => {
                let background = self.bank.music.background.clone();
                self.audio.play_looped(&background);
            }
        }
    }

    pub fn play_reward_audio(&mut self, reward: RewardKind) {
        let track = match reward {
            RewardKind::Correct | RewardKind::Stars => self.bank.music.correct.clone(),
            RewardKind::Wrong => self.bank.music.wrong.clone(),
        };
        self.audio.play(&track);
    }
}

impl Default for QuestApp {
    fn default() -> Self {
        Self::new()
    }
}
