// src/store.rs

use crate::error::StoreError;
use std::collections::{HashMap, VecDeque};

/// Almacén clave-valor opaco (strings). La app usa el storage de eframe;
/// los tests usan `MemoryStore`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<'a> KeyValueStore for dyn eframe::Storage + 'a {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get_string(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_string(key, value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub key: String,
    pub value: String,
}

/// Cola FIFO de escrituras "fire-and-forget".
///
/// Cada mutación encola el valor completo; `flush` las aplica en el mismo
/// orden en que se emitieron, así la última emitida es también la última
/// aplicada. Los fallos se registran y se descartan sin reintentar.
#[derive(Debug, Default)]
pub struct WriteQueue {
    pending: VecDeque<PendingWrite>,
}

impl WriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: String) {
        self.pending.push_back(PendingWrite {
            key: key.to_owned(),
            value,
        });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &PendingWrite> {
        self.pending.iter()
    }

    /// Vacía la cola sobre `store`. Devuelve cuántas escrituras tuvieron éxito.
    pub fn flush<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> usize {
        let mut written = 0;
        while let Some(write) = self.pending.pop_front() {
            match store.set(&write.key, &write.value) {
                Ok(()) => written += 1,
                Err(e) => log::warn!("dropping write for `{}`: {e}", write.key),
            }
        }
        written
    }
}
