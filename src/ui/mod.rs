pub mod layout;
pub mod views;

use crate::QuestApp;
use crate::app::{InputEvent, ScreenLayout, ViewportRequest};
use crate::model::Screen;
use eframe::App;
use egui::{Context, Event, PointerButton, ViewportCommand};
use std::time::Duration;

impl App for QuestApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut keep_running = true;

        // Resize sintético: solo cuando cambia la geometría acotada.
        let size = ctx.screen_rect().size();
        if ScreenLayout::new(size.x, size.y) != self.layout {
            keep_running &= self.handle_event(InputEvent::Resized(size));
        }

        // Un evento del navegador por cada evento crudo de egui.
        for event in translate_events(ctx.input(|i| i.events.clone())) {
            keep_running &= self.handle_event(event);
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            keep_running &= self.handle_event(InputEvent::Quit);
        }

        for request in self.viewport_requests.drain(..) {
            match request {
                ViewportRequest::Fullscreen(on) => {
                    ctx.send_viewport_cmd(ViewportCommand::Fullscreen(on))
                }
            }
        }
        if !keep_running {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        // Las regiones de click del frame se reescriben en cada dibujado;
        // el siguiente evento de entrada consulta exactamente estas.
        self.regions.begin(self.screen);

        match self.screen {
            Screen::Splash => views::splash::ui_splash(self, ctx),
            Screen::SecondPage => views::second_page::ui_second_page(self, ctx),
            Screen::Select => views::select::ui_select(self, ctx),
            Screen::ExerciseLevel => views::exercise_level::ui_exercise_level(self, ctx),
            Screen::Intro => views::intro::ui_intro(self, ctx),
            Screen::Map => views::map::ui_map(self, ctx),
            Screen::MapImage => views::map_image::ui_map_image(self, ctx),
            Screen::SublevelSelection => {
                views::sublevel_selection::ui_sublevel_selection(self, ctx)
            }
            Screen::LevelQuestion => views::level_question::ui_level_question(self, ctx),
            Screen::LevelReward => views::level_reward::ui_level_reward(self, ctx),
            Screen::MissionComplete => views::mission_complete::ui_mission_complete(self, ctx),
            Screen::Mechanics => views::mechanics::ui_mechanics(self, ctx),
            Screen::Menu => views::menu::ui_menu(self, ctx),
            Screen::Slideshow => views::slideshow::ui_slideshow(self, ctx),
            Screen::IntroNewGame => views::intro_new_game::ui_intro_new_game(self, ctx),
        }

        // Tick fijo a ~60 Hz.
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// Traduce los eventos crudos de egui a los eventos del navegador.
/// Solo botón primario del ratón; el resto de eventos se descarta.
fn translate_events(events: Vec<Event>) -> Vec<InputEvent> {
    let mut out = Vec::new();
    for event in events {
        match event {
            Event::Key {
                key, pressed: true, ..
            } => out.push(InputEvent::Key(key)),
            Event::Text(text) => out.extend(text.chars().map(InputEvent::Char)),
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => out.push(if pressed {
                InputEvent::PointerDown(pos)
            } else {
                InputEvent::PointerUp
            }),
            Event::PointerMoved(pos) => out.push(InputEvent::PointerMoved(pos)),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Key, Modifiers, pos2};

    #[test]
    fn translate_keeps_presses_and_primary_clicks() {
        let events = vec![
            Event::Key {
                key: Key::Num1,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            },
            Event::Key {
                key: Key::Num1,
                physical_key: None,
                pressed: false,
                repeat: false,
                modifiers: Modifiers::NONE,
            },
            Event::PointerButton {
                pos: pos2(5.0, 5.0),
                button: PointerButton::Secondary,
                pressed: true,
                modifiers: Modifiers::NONE,
            },
            Event::Text("9+".to_owned()),
        ];
        let translated = translate_events(events);
        assert_eq!(
            translated,
            vec![
                InputEvent::Key(Key::Num1),
                InputEvent::Char('9'),
                InputEvent::Char('+'),
            ]
        );
    }
}
