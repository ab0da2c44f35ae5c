use super::*;
use crate::store::KeyValueStore;
use std::time::Duration;

impl MedPrepApp {
    /// Sincroniza las sesiones con la pantalla activa y con el almacén:
    /// vacía las escrituras del checklist, carga o descarta sesiones.
    pub fn sync_sessions(&mut self, storage: Option<&mut (dyn eframe::Storage + 'static)>) {
        match storage {
            Some(storage) => self.sync_with(storage),
            None => {
                let mut fallback = std::mem::take(&mut self.fallback_store);
                self.sync_with(&mut fallback);
                self.fallback_store = fallback;
            }
        }
    }

    pub fn sync_with<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        // 1) Primero las escrituras, para no perderlas al soltar la sesión
        if let Some(checklist) = self.checklist.as_mut() {
            checklist.flush(&mut *store);
        }

        // 2) Checklist: se carga al entrar, se descarta al salir
        if self.state == AppState::Checklist {
            if self.checklist.is_none() {
                self.checklist = Some(Checklist::load(self.content.clone(), &*store));
            }
        } else {
            self.checklist = None;
        }

        // 3) Juego: ronda nueva al entrar, sin persistencia
        if self.state == AppState::Game {
            if self.game.is_none() {
                self.game = Some(SequencingGame::new_game(
                    self.content.clone(),
                    &mut rand::rng(),
                ));
            }
        } else {
            self.game = None;
        }
    }

    /// Aplica los retornos vencidos y devuelve cuándo vence el siguiente.
    pub fn tick_game(&mut self, now: Duration) -> Option<Duration> {
        let game = self.game.as_mut()?;
        game.tick(now);
        game.next_revert_at()
    }
}
