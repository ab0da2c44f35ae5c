use crate::checklist::Checklist;
use crate::game::SequencingGame;
use crate::model::{AppState, Content};
use crate::store::MemoryStore;
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod sessions;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{ChecklistSummary, GameSummary, PhaseInfo, StepRow, TaskRow};

pub struct MedPrepApp {
    pub content: Arc<Content>,
    pub state: AppState,
    /// Sesión del checklist; existe solo mientras la pantalla está activa.
    pub checklist: Option<Checklist>,
    /// Ronda en curso; se descarta al salir de la pantalla.
    pub game: Option<SequencingGame>,
    /// Almacén de reserva cuando eframe no ofrece storage persistente.
    pub fallback_store: MemoryStore,
}

impl MedPrepApp {
    pub fn new(content: Content) -> Self {
        Self {
            content: Arc::new(content),
            state: AppState::Home,
            checklist: None,
            game: None,
            fallback_store: MemoryStore::new(),
        }
    }
}
