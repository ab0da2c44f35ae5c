mod helpers;
pub mod layout;
pub mod palette;
pub mod views;

use crate::app::MedPrepApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::time::Duration;

impl App for MedPrepApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // Cargar/descartar sesiones según la pantalla actual
        self.sync_sessions(frame.storage_mut());

        let now = ctx.input(|i| Duration::from_secs_f64(i.time));
        self.tick_game(now);

        // PANEL INFERIOR: aviso y tema oscuro o claro
        bottom_panel(ctx);

        // Dispatch por estado
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Checklist => views::checklist::ui_checklist(self, ctx),
            AppState::Game => views::game::ui_game(self, ctx, now),
        }

        // Las acciones de este frame se escriben ya, no en el próximo autosave
        self.sync_sessions(frame.storage_mut());

        if let Some(due) = self.game.as_ref().and_then(|g| g.next_revert_at()) {
            ctx.request_repaint_after(due.saturating_sub(now));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.sync_with(storage);
    }
}
