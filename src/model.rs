use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub color: String, // "#RRGGBB"
    #[serde(default)]
    pub icon: String,
    pub tasks: Vec<Task>,
}

impl Phase {
    /// Color de la fase ya decodificado; gris si el texto no es válido.
    pub fn rgb(&self) -> [u8; 3] {
        parse_hex_color(&self.color).unwrap_or([0x8E, 0x99, 0xA4])
    }

    pub fn has_task(&self, task_id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == task_id)
    }
}

/// Parámetros estáticos que acompañan al contenido.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub storage_key: String,
    pub revert_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: "colonoscopy_checklist".to_owned(),
            revert_delay_ms: 800,
        }
    }
}

impl Settings {
    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }
}

/// Todo el contenido de la app: fases del checklist y pasos del juego.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Content {
    #[serde(default)]
    pub settings: Settings,
    pub phases: Vec<Phase>,
    pub steps: Vec<String>, // orden canónico
}

impl Content {
    pub fn phase(&self, phase_id: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == phase_id)
    }

    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.phases.iter().flat_map(|p| p.tasks.iter())
    }

    pub fn total_tasks(&self) -> usize {
        self.phases.iter().map(|p| p.tasks.len()).sum()
    }

    pub fn has_task(&self, task_id: &str) -> bool {
        self.phases.iter().any(|p| p.has_task(task_id))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Home,
    Checklist,
    Game,
}

/// Estado de cada opción del juego de secuencias.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionStatus {
    #[default]
    Idle,
    Correct, // solo visual; la máquina de estados pasa directamente a Used
    Incorrect,
    Used,
}

pub fn parse_hex_color(text: &str) -> Option<[u8; 3]> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
