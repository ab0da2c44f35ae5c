use super::*;
use crate::game::Selection;
use std::time::Duration;

impl MedPrepApp {
    pub fn toggle_task(&mut self, task_id: &str) {
        if let Some(checklist) = self.checklist.as_mut() {
            checklist.toggle_task(task_id);
        }
    }

    pub fn toggle_phase(&mut self, phase_id: &str) {
        if let Some(checklist) = self.checklist.as_mut() {
            checklist.toggle_phase(phase_id);
        }
    }

    pub fn reset_checklist(&mut self) {
        if let Some(checklist) = self.checklist.as_mut() {
            log::info!("checklist reset");
            checklist.reset();
        }
    }

    pub fn select_step(&mut self, option: &str, now: Duration) -> Selection {
        match self.game.as_mut() {
            Some(game) => game.select_option(option, now),
            None => Selection::Ignored,
        }
    }

    /// "Reiniciar" y "Play Again" hacen lo mismo: ronda nueva.
    pub fn reset_game(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.reset(&mut rand::rng());
        }
    }
}
