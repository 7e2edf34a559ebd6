use crate::QuestApp;
use crate::model::RewardKind;
use crate::ui::layout::{draw_artwork, fallback_title, footer, screen_panel};
use egui::Context;

pub fn ui_level_reward(app: &mut QuestApp, ctx: &Context) {
    screen_panel(ctx, |ui| {
        let reward = app.reward.unwrap_or(RewardKind::Correct);
        let art = match reward {
            RewardKind::Correct => app.bank.rewards.correct.clone(),
            RewardKind::Wrong => app.bank.rewards.wrong.clone(),
            RewardKind::Stars => app.bank.rewards.stars.clone(),
        };
        if draw_artwork(app, ui, &art).is_none() {
            let text = match reward {
                RewardKind::Correct => "¡CORRECTO!",
                RewardKind::Wrong => "¡CASI! INTÉNTALO OTRA VEZ",
                RewardKind::Stars => "¡ESTRELLAS! ¡PUNTUACIÓN PERFECTA!",
            };
            fallback_title(app, ui, text);
        }
        footer(app, ui, "Pulsa ESPACIO o haz click para continuar");
    });
}
