// src/checklist.rs

use crate::model::{Content, Phase};
use crate::store::{KeyValueStore, WriteQueue};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Conteo `completadas / total` de una fase o del checklist completo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }
}

/// Checklist de preparación: tareas marcadas (persistidas) y fases plegadas
/// (solo en memoria).
#[derive(Debug)]
pub struct Checklist {
    content: Arc<Content>,
    checked_tasks: BTreeMap<String, bool>,
    // Solo guarda desviaciones: una fase ausente está expandida
    expanded_phases: HashMap<String, bool>,
    writes: WriteQueue,
}

impl Checklist {
    /// Checklist vacío, sin leer nada del almacén.
    pub fn empty(content: Arc<Content>) -> Self {
        Self {
            content,
            checked_tasks: BTreeMap::new(),
            expanded_phases: HashMap::new(),
            writes: WriteQueue::new(),
        }
    }

    /// Lee el estado guardado. Si falta, falla la lectura o no se puede
    /// parsear, arranca vacío sin avisar al usuario.
    pub fn load<S: KeyValueStore + ?Sized>(content: Arc<Content>, store: &S) -> Self {
        let key = content.settings.storage_key.clone();
        let mut checklist = Self::empty(content);

        let raw = match store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("no saved checklist under `{key}`");
                return checklist;
            }
            Err(e) => {
                log::warn!("could not read checklist, starting empty: {e}");
                return checklist;
            }
        };

        match serde_json::from_str::<BTreeMap<String, bool>>(&raw) {
            Ok(mut saved) => {
                // Descarta ids que ya no existen en el contenido
                saved.retain(|id, _| checklist.content.has_task(id));
                log::debug!("checklist loaded with {} entries", saved.len());
                checklist.checked_tasks = saved;
            }
            Err(e) => log::warn!("saved checklist is malformed, starting empty: {e}"),
        }
        checklist
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn checked_tasks(&self) -> &BTreeMap<String, bool> {
        &self.checked_tasks
    }

    pub fn is_checked(&self, task_id: &str) -> bool {
        self.checked_tasks.get(task_id).copied().unwrap_or(false)
    }

    pub fn is_expanded(&self, phase_id: &str) -> bool {
        self.expanded_phases.get(phase_id).copied().unwrap_or(true)
    }

    /// Invierte una tarea y encola el mapa completo. Devuelve el nuevo valor,
    /// o `None` si el id no pertenece al contenido.
    pub fn toggle_task(&mut self, task_id: &str) -> Option<bool> {
        if !self.content.has_task(task_id) {
            log::debug!("ignoring toggle of unknown task `{task_id}`");
            return None;
        }
        let entry = self.checked_tasks.entry(task_id.to_owned()).or_insert(false);
        *entry = !*entry;
        let now_checked = *entry;
        self.persist();
        Some(now_checked)
    }

    /// Pliega o despliega una fase. No persiste nada.
    pub fn toggle_phase(&mut self, phase_id: &str) -> Option<bool> {
        if self.content.phase(phase_id).is_none() {
            return None;
        }
        let expanded = !self.is_expanded(phase_id);
        self.expanded_phases.insert(phase_id.to_owned(), expanded);
        Some(expanded)
    }

    /// Borra todas las marcas y guarda el mapa vacío. Las fases no cambian.
    pub fn reset(&mut self) {
        self.checked_tasks.clear();
        self.persist();
    }

    pub fn progress(&self, phase: &Phase) -> Progress {
        Progress {
            completed: phase.tasks.iter().filter(|t| self.is_checked(&t.id)).count(),
            total: phase.tasks.len(),
        }
    }

    pub fn overall_progress(&self) -> Progress {
        self.content
            .phases
            .iter()
            .map(|p| self.progress(p))
            .fold(Progress { completed: 0, total: 0 }, |acc, p| Progress {
                completed: acc.completed + p.completed,
                total: acc.total + p.total,
            })
    }

    pub fn has_pending_writes(&self) -> bool {
        !self.writes.is_empty()
    }

    /// Aplica las escrituras pendientes, en orden, sobre `store`.
    pub fn flush<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> usize {
        self.writes.flush(store)
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.checked_tasks) {
            Ok(json) => self.writes.push(&self.content.settings.storage_key, json),
            Err(e) => log::warn!("could not serialize checklist: {e}"),
        }
    }
}
