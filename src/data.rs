// src/data.rs

use crate::error::ContentError;
use crate::model::{Content, parse_hex_color};
use std::collections::HashSet;

/// Carga el contenido desde el YAML embebido
pub fn read_content_embedded() -> Result<Content, ContentError> {
    let file_content = include_str!("data/content.yaml");
    parse_content(file_content)
}

/// Parsea y valida un documento de contenido.
pub fn parse_content(yaml: &str) -> Result<Content, ContentError> {
    let content: Content = serde_yaml::from_str(yaml)?;
    validate(&content)?;
    log::debug!(
        "content loaded: {} phases, {} tasks, {} steps",
        content.phases.len(),
        content.total_tasks(),
        content.steps.len()
    );
    Ok(content)
}

fn validate(content: &Content) -> Result<(), ContentError> {
    let mut phase_ids = HashSet::new();
    let mut task_ids = HashSet::new();

    for phase in &content.phases {
        if !phase_ids.insert(phase.id.as_str()) {
            return Err(ContentError::DuplicatePhase(phase.id.clone()));
        }
        if phase.tasks.is_empty() {
            return Err(ContentError::EmptyPhase(phase.id.clone()));
        }
        if parse_hex_color(&phase.color).is_none() {
            return Err(ContentError::InvalidColor {
                phase: phase.id.clone(),
                color: phase.color.clone(),
            });
        }
        for task in &phase.tasks {
            if !task_ids.insert(task.id.as_str()) {
                return Err(ContentError::DuplicateTask(task.id.clone()));
            }
        }
    }

    // Con menos de 2 pasos no existe una permutación distinta del orden canónico
    if content.steps.len() < 2 {
        return Err(ContentError::TooFewSteps(content.steps.len()));
    }
    let mut steps = HashSet::new();
    for step in &content.steps {
        if !steps.insert(step.as_str()) {
            return Err(ContentError::DuplicateStep(step.clone()));
        }
    }

    Ok(())
}
