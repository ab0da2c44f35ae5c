// src/view_models.rs

use crate::checklist::Progress;
use crate::model::OptionStatus;

#[derive(Clone, Debug)]
pub struct TaskRow {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

#[derive(Clone, Debug)]
pub struct PhaseInfo {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub rgb: [u8; 3],
    pub progress: Progress,
    pub expanded: bool,
    pub tasks: Vec<TaskRow>,
}

#[derive(Clone, Copy, Debug)]
pub struct ChecklistSummary {
    pub progress: Progress,
}

#[derive(Clone, Debug)]
pub struct StepRow {
    pub number: usize, // posición 1-based en la lista barajada
    pub text: String,
    pub status: OptionStatus,
}

#[derive(Clone, Copy, Debug)]
pub struct GameSummary {
    pub selected: usize,
    pub total: usize,
    pub complete: bool,
}

impl PhaseInfo {
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.progress.completed, self.progress.total)
    }

    pub fn chevron(&self) -> &'static str {
        if self.expanded { "⏶" } else { "⏷" }
    }
}

impl ChecklistSummary {
    pub fn label(&self) -> String {
        if self.progress.is_complete() {
            "All tasks complete!".to_owned()
        } else {
            format!(
                "{} of {} tasks completed",
                self.progress.completed, self.progress.total
            )
        }
    }
}

impl GameSummary {
    pub fn progress_label(&self) -> String {
        format!("{} / {} steps", self.selected, self.total)
    }

    pub fn prompt_label(&self) -> String {
        if self.selected == 0 {
            "TAP THE FIRST STEP".to_owned()
        } else {
            format!("TAP STEP {}", self.selected + 1)
        }
    }

    pub fn score_label(&self) -> String {
        format!("{}/{}", self.selected, self.total)
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.selected as f32 / self.total as f32
        }
    }
}
