use super::*;

impl MedPrepApp {
    /// Las sesiones se crean o descartan en `sync_sessions`, después de
    /// vaciar las escrituras pendientes.
    pub fn open_checklist(&mut self) {
        self.state = AppState::Checklist;
    }

    pub fn open_game(&mut self) {
        self.state = AppState::Game;
    }

    pub fn go_home(&mut self) {
        self.state = AppState::Home;
    }
}
