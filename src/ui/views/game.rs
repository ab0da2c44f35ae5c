use crate::app::MedPrepApp;
use crate::model::OptionStatus;
use crate::ui::helpers::{big_list_button, progress_row};
use crate::ui::layout::{centered_panel, scroll_panel, top_bar};
use crate::ui::palette;
use crate::view_models::{GameSummary, StepRow};
use egui::{Color32, Context, Frame, RichText, Sense, Stroke, Ui};
use std::time::Duration;

pub fn ui_game(app: &mut MedPrepApp, ctx: &Context, now: Duration) {
    let (back, reset) = top_bar(ctx, "Antibiotic Sequencing");
    if back {
        app.go_home();
        return;
    }
    if reset {
        app.reset_game();
    }

    let Some(summary) = app.game_summary() else {
        return;
    };

    if summary.complete {
        ui_complete(app, ctx, &summary);
        return;
    }

    let selected: Vec<String> = app
        .game
        .as_ref()
        .map(|g| g.selected_order().to_vec())
        .unwrap_or_default();
    let rows = app.step_rows();

    scroll_panel(ctx, 680.0, |ui, width| {
        progress_row(ui, summary.fraction(), palette::MEDICAL_BLUE, &summary.progress_label(), width);
        ui.add_space(12.0);

        if !selected.is_empty() {
            ui.label(RichText::new("COMPLETED STEPS").small().color(palette::MED_GRAY));
            for (i, step) in selected.iter().enumerate() {
                ui.label(RichText::new(format!("{}. {step} ✔", i + 1)).color(palette::SUCCESS));
            }
            ui.add_space(12.0);
        }

        ui.label(RichText::new(summary.prompt_label()).small().color(palette::MED_GRAY));
        ui.add_space(4.0);
        for row in &rows {
            if step_option(ui, row, width) {
                app.select_step(&row.text, now);
            }
            ui.add_space(6.0);
        }
    });
}

/// Pinta una opción; devuelve true si se pulsó y se puede pulsar.
fn step_option(ui: &mut Ui, row: &StepRow, width: f32) -> bool {
    let (fill, border, text_color) = match row.status {
        OptionStatus::Correct => (palette::tint(palette::SUCCESS, 0x15), palette::SUCCESS, None),
        OptionStatus::Incorrect => (palette::tint(palette::ERROR, 0x15), palette::ERROR, None),
        OptionStatus::Used => (Color32::TRANSPARENT, palette::DIVIDER, Some(palette::MED_GRAY)),
        OptionStatus::Idle => (ui.visuals().window_fill(), palette::DIVIDER, None),
    };
    let mark = match row.status {
        OptionStatus::Correct => " ✔",
        OptionStatus::Incorrect => " ✖",
        _ => "",
    };

    let response = Frame::default()
        .fill(fill)
        .stroke(Stroke::new(1.0, border))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(width - 24.0);
            let mut text = RichText::new(format!("{}  {}{mark}", row.number, row.text));
            if let Some(color) = text_color {
                text = text.color(color);
            }
            ui.label(text);
        })
        .response;

    if row.status == OptionStatus::Used {
        return false;
    }
    response.interact(Sense::click()).clicked()
}

fn ui_complete(app: &mut MedPrepApp, ctx: &Context, summary: &GameSummary) {
    centered_panel(ctx, 280.0, 420.0, |ui| {
        ui.label(RichText::new("✅").size(48.0).color(palette::SUCCESS));
        ui.heading("Excellent Work!");
        ui.label(format!(
            "You correctly sequenced all {} steps for antibiotic reconstitution.",
            summary.total
        ));
        ui.add_space(12.0);
        ui.label(RichText::new("Score").small().color(palette::MED_GRAY));
        ui.label(RichText::new(summary.score_label()).size(28.0).strong());
        ui.add_space(16.0);
        let button_w = ui.available_width();
        if big_list_button(ui, "🔄 Play Again", button_w, 40.0, true) {
            app.reset_game();
        }
    });
}
