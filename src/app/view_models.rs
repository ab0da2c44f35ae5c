use super::*;

impl MedPrepApp {
    pub fn phase_infos(&self) -> Vec<PhaseInfo> {
        let Some(checklist) = self.checklist.as_ref() else {
            return Vec::new();
        };
        self.content
            .phases
            .iter()
            .map(|phase| PhaseInfo {
                id: phase.id.clone(),
                title: phase.title.clone(),
                subtitle: phase.subtitle.clone(),
                icon: phase.icon.clone(),
                rgb: phase.rgb(),
                progress: checklist.progress(phase),
                expanded: checklist.is_expanded(&phase.id),
                tasks: phase
                    .tasks
                    .iter()
                    .map(|t| TaskRow {
                        id: t.id.clone(),
                        text: t.text.clone(),
                        checked: checklist.is_checked(&t.id),
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn checklist_summary(&self) -> Option<ChecklistSummary> {
        let checklist = self.checklist.as_ref()?;
        Some(ChecklistSummary {
            progress: checklist.overall_progress(),
        })
    }

    pub fn step_rows(&self) -> Vec<StepRow> {
        let Some(game) = self.game.as_ref() else {
            return Vec::new();
        };
        game.shuffled_options()
            .iter()
            .enumerate()
            .map(|(i, text)| StepRow {
                number: i + 1,
                text: text.clone(),
                status: game.status(text),
            })
            .collect()
    }

    pub fn game_summary(&self) -> Option<GameSummary> {
        let game = self.game.as_ref()?;
        Some(GameSummary {
            selected: game.score(),
            total: game.total_steps(),
            complete: game.is_complete(),
        })
    }
}
